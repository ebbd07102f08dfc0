//! SVG rendering adapter.
//!
//! Turns a [`ChartFrame`] into a standalone SVG document. Every per-entry
//! element carries a `data-index` attribute so web hosts can route pointer
//! events back through the interaction mapper.

use std::fmt::Write as _;

use crate::core::ColorToken;
use crate::error::ChartResult;
use crate::render::primitives::{
    GeometryPrimitive, LabelPrimitive, SeriesRole, SeriesShape, Shape, TextAnchor, svg_path_data,
};
use crate::render::{ChartFrame, Renderer};

const CONNECTOR_STROKE_WIDTH: f64 = 2.0;
const LABEL_FONT_SIZE_PX: f64 = 12.0;
const CENTER_LABEL_FONT_SIZE_PX: f64 = 20.0;

/// Renderer that keeps the last frame as SVG markup.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    background: ColorToken,
    text_color: ColorToken,
    document: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            background: ColorToken::new("#ffffff"),
            text_color: ColorToken::new("#374151"),
            document: String::new(),
        }
    }

    /// Sets the surface color; doughnut holes are filled with it.
    #[must_use]
    pub fn with_background(mut self, background: impl Into<ColorToken>) -> Self {
        self.background = background.into();
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: impl Into<ColorToken>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Markup of the last rendered frame.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    /// Serializes `frame` without touching renderer state.
    pub fn to_svg_string(&self, frame: &ChartFrame) -> ChartResult<String> {
        frame.validate()?;

        let mut out = String::new();
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );

        for series in frame.underlay_series() {
            self.write_series(&mut out, series);
        }
        for primitive in &frame.primitives {
            self.write_primitive(&mut out, primitive);
        }
        for series in frame.overlay_series() {
            self.write_series(&mut out, series);
        }
        for label in &frame.labels {
            self.write_label(&mut out, label, LABEL_FONT_SIZE_PX);
        }
        if let Some(label) = &frame.center_label {
            self.write_label(&mut out, label, CENTER_LABEL_FONT_SIZE_PX);
        }

        out.push_str("</svg>\n");
        Ok(out)
    }

    fn write_primitive(&self, out: &mut String, primitive: &GeometryPrimitive) {
        let tag = &primitive.tag;
        let fill = escape_xml(tag.color.as_str());
        let _ = match &primitive.shape {
            Shape::Rect {
                x,
                y,
                width,
                height,
            } => write!(
                out,
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill}""#
            ),
            Shape::Path { commands, .. } => write!(
                out,
                r#"<path d="{}" fill="{fill}" stroke="{}" stroke-width="2""#,
                svg_path_data(commands),
                escape_xml(self.background.as_str())
            ),
            Shape::Circle { cx, cy, r } => write!(
                out,
                r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}""#
            ),
            Shape::Polyline { points } => write!(
                out,
                r#"<polyline points="{}" fill="none" stroke="{fill}""#,
                polyline_points(points)
            ),
        };
        let _ = writeln!(
            out,
            r#" data-index="{}"><title>{}</title></{}>"#,
            tag.data_index,
            escape_xml(&tag.label),
            element_name(&primitive.shape)
        );
    }

    fn write_series(&self, out: &mut String, series: &SeriesShape) {
        let color = series.color.as_ref().unwrap_or(&self.background);
        let color = escape_xml(color.as_str());
        match (&series.shape, series.role) {
            (Shape::Polyline { points }, SeriesRole::Connector) => {
                let _ = writeln!(
                    out,
                    r#"<polyline points="{}" fill="none" stroke="{color}" stroke-width="{CONNECTOR_STROKE_WIDTH}"/>"#,
                    polyline_points(points)
                );
            }
            (Shape::Circle { cx, cy, r }, _) => {
                let _ = writeln!(out, r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{color}"/>"#);
            }
            (Shape::Rect { x, y, width, height }, _) => {
                let _ = writeln!(
                    out,
                    r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{color}"/>"#
                );
            }
            (Shape::Path { commands, .. }, _) => {
                let _ = writeln!(out, r#"<path d="{}" fill="{color}"/>"#, svg_path_data(commands));
            }
            (Shape::Polyline { points }, _) => {
                let _ = writeln!(
                    out,
                    r#"<polyline points="{}" fill="none" stroke="{color}"/>"#,
                    polyline_points(points)
                );
            }
        }
    }

    fn write_label(&self, out: &mut String, label: &LabelPrimitive, font_size: f64) {
        let anchor = match label.align {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{}" font-size="{font_size}" text-anchor="{anchor}" dominant-baseline="middle" fill="{}">{}</text>"#,
            label.anchor.x,
            label.anchor.y,
            escape_xml(self.text_color.as_str()),
            escape_xml(&label.text)
        );
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        self.document = self.to_svg_string(frame)?;
        Ok(())
    }
}

fn element_name(shape: &Shape) -> &'static str {
    match shape {
        Shape::Rect { .. } => "rect",
        Shape::Path { .. } => "path",
        Shape::Circle { .. } => "circle",
        Shape::Polyline { .. } => "polyline",
    }
}

fn polyline_points(points: &[crate::core::Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
