use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::core::ColorToken;
use crate::error::{ChartError, ChartResult};
use crate::render::primitives::{
    LabelPrimitive, PathCommand, SeriesRole, SeriesShape, Shape, TextAnchor,
};
use crate::render::{ChartFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub primitives_drawn: usize,
    pub series_drawn: usize,
    pub labels_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &ChartFrame)
    -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Color tokens must be `#rgb`/`#rrggbb` hex strings; any other token fails
/// the render with `ChartError::InvalidData`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    background: ColorToken,
    text_color: ColorToken,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            background: ColorToken::new("#ffffff"),
            text_color: ColorToken::new("#374151"),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_background(&mut self, color: ColorToken) -> ChartResult<()> {
        color.to_rgba()?;
        self.background = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, &self.background)?;
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for series in frame.underlay_series() {
            self.draw_series(context, series)?;
            stats.series_drawn += 1;
        }

        for primitive in &frame.primitives {
            append_shape(context, &primitive.shape);
            apply_color(context, &primitive.tag.color)?;
            match primitive.shape {
                Shape::Polyline { .. } => context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke polyline", err))?,
                _ => context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill primitive", err))?,
            }
            stats.primitives_drawn += 1;
        }

        for series in frame.overlay_series() {
            self.draw_series(context, series)?;
            stats.series_drawn += 1;
        }

        for (label, font_size) in frame
            .labels
            .iter()
            .map(|label| (label, 12.0))
            .chain(frame.center_label.iter().map(|label| (label, 20.0)))
        {
            self.draw_label(context, label, font_size)?;
            stats.labels_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }

    fn draw_series(&self, context: &Context, series: &SeriesShape) -> ChartResult<()> {
        append_shape(context, &series.shape);
        apply_color(context, series.color.as_ref().unwrap_or(&self.background))?;
        match series.role {
            SeriesRole::Connector => {
                context.set_line_width(2.0);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke connector", err))
            }
            SeriesRole::DoughnutHole => context
                .fill()
                .map_err(|err| map_backend_error("failed to fill doughnut hole", err)),
        }
    }

    fn draw_label(&self, context: &Context, label: &LabelPrimitive, font_size: f64) -> ChartResult<()> {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {font_size}"));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&label.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match label.align {
            TextAnchor::Start => label.anchor.x,
            TextAnchor::Middle => label.anchor.x - f64::from(text_width) / 2.0,
            TextAnchor::End => label.anchor.x - f64::from(text_width),
        };

        apply_color(context, &self.text_color)?;
        context.move_to(x, label.anchor.y - f64::from(text_height) / 2.0);
        pangocairo::functions::show_layout(context, &layout);
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &ChartFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: &ColorToken) -> ChartResult<()> {
    let [red, green, blue, alpha] = color.to_rgba()?;
    context.set_source_rgba(red, green, blue, alpha);
    Ok(())
}

fn append_shape(context: &Context, shape: &Shape) {
    context.new_path();
    match shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
        } => context.rectangle(*x, *y, *width, *height),
        Shape::Circle { cx, cy, r } => {
            context.new_sub_path();
            context.arc(*cx, *cy, *r, 0.0, TAU);
        }
        Shape::Polyline { points } => {
            for (i, p) in points.iter().enumerate() {
                if i == 0 {
                    context.move_to(p.x, p.y);
                } else {
                    context.line_to(p.x, p.y);
                }
            }
        }
        Shape::Path { commands, slice } => {
            // Cairo angles start at 3 o'clock; slice angles start at 12.
            let mut arc_from = slice.start_angle;
            for command in commands {
                match *command {
                    PathCommand::MoveTo(p) => context.move_to(p.x, p.y),
                    PathCommand::LineTo(p) => context.line_to(p.x, p.y),
                    PathCommand::ArcTo { .. } => {
                        let arc_to = if slice.is_full_circle() {
                            arc_from + PI
                        } else {
                            slice.end_angle
                        };
                        context.arc(
                            slice.center.x,
                            slice.center.y,
                            slice.radius,
                            arc_from - FRAC_PI_2,
                            arc_to - FRAC_PI_2,
                        );
                        arc_from = arc_to;
                    }
                    PathCommand::Close => context.close_path(),
                }
            }
        }
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
