use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ColorToken, Point, SliceGeometry};
use crate::error::{ChartError, ChartResult};

/// One step of a slice outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc from the current point to `to`.
    ArcTo {
        radius: f64,
        large_arc: bool,
        clockwise: bool,
        to: Point,
    },
    Close,
}

impl PathCommand {
    fn is_finite(&self) -> bool {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => p.is_finite(),
            Self::ArcTo { radius, to, .. } => radius.is_finite() && to.is_finite(),
            Self::Close => true,
        }
    }
}

/// Slice outlines need at most move + line + two arcs + close.
pub type PathCommands = SmallVec<[PathCommand; 5]>;

/// Renders commands as SVG path data (`d` attribute).
#[must_use]
pub fn svg_path_data(commands: &[PathCommand]) -> String {
    let mut out = String::new();
    for command in commands {
        if !out.is_empty() {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = match command {
            PathCommand::MoveTo(p) => write!(out, "M {} {}", p.x, p.y),
            PathCommand::LineTo(p) => write!(out, "L {} {}", p.x, p.y),
            PathCommand::ArcTo {
                radius,
                large_arc,
                clockwise,
                to,
            } => write!(
                out,
                "A {radius} {radius} 0 {} {} {} {}",
                u8::from(*large_arc),
                u8::from(*clockwise),
                to.x,
                to.y
            ),
            PathCommand::Close => write!(out, "Z"),
        };
    }
    out
}

/// Drawable geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Pie/doughnut slice outline; `slice` keeps the angular description.
    Path {
        commands: PathCommands,
        slice: SliceGeometry,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Polyline {
        points: Vec<Point>,
    },
}

impl Shape {
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Self::Rect {
                x,
                y,
                width,
                height,
            } => point.x >= *x && point.x <= x + width && point.y >= *y && point.y <= y + height,
            Self::Path { slice, .. } => slice.contains(point),
            Self::Circle { cx, cy, r } => Point::new(*cx, *cy).distance_to(point) <= *r,
            Self::Polyline { .. } => false,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        let finite = match self {
            Self::Rect {
                x,
                y,
                width,
                height,
            } => {
                if *width < 0.0 || *height < 0.0 {
                    return Err(ChartError::InvalidData(
                        "rect size must be non-negative".to_owned(),
                    ));
                }
                [x, y, width, height].iter().all(|v| v.is_finite())
            }
            Self::Path { commands, slice } => {
                commands.iter().all(PathCommand::is_finite)
                    && slice.center.is_finite()
                    && slice.start_angle.is_finite()
                    && slice.end_angle.is_finite()
            }
            Self::Circle { cx, cy, r } => {
                if *r < 0.0 {
                    return Err(ChartError::InvalidData(
                        "circle radius must be non-negative".to_owned(),
                    ));
                }
                cx.is_finite() && cy.is_finite() && r.is_finite()
            }
            Self::Polyline { points } => points.iter().all(|p| p.is_finite()),
        };

        if finite {
            Ok(())
        } else {
            Err(ChartError::InvalidData(
                "shape coordinates must be finite".to_owned(),
            ))
        }
    }
}

/// Identity of the data point a primitive was generated for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveTag {
    pub data_index: usize,
    pub label: String,
    pub value: f64,
    pub color: ColorToken,
}

/// Core per-entry primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryPrimitive {
    pub shape: Shape,
    pub tag: PrimitiveTag,
}

/// Purpose of an untagged series-level shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesRole {
    /// Polyline joining line-chart markers.
    Connector,
    /// Disc punched out of the center of a doughnut.
    DoughnutHole,
}

impl SeriesRole {
    /// Whether the shape is drawn beneath the per-entry primitives.
    ///
    /// Connectors sit under their markers; doughnut holes cover the slice
    /// centers.
    #[must_use]
    pub const fn is_underlay(self) -> bool {
        matches!(self, Self::Connector)
    }
}

/// Shape spanning the whole series rather than one entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesShape {
    pub role: SeriesRole,
    pub shape: Shape,
    /// Stroke/fill token; `None` means the surface background.
    pub color: Option<ColorToken>,
}

/// Horizontal text anchor relative to `LabelPrimitive::anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelRole {
    Category,
    Value,
    CenterTotal,
}

/// Positioned text; styling is up to the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPrimitive {
    pub text: String,
    pub anchor: Point,
    pub align: TextAnchor,
    pub role: LabelRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_index: Option<usize>,
}

impl LabelPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "label text must not be empty".to_owned(),
            ));
        }
        if !self.anchor.is_finite() {
            return Err(ChartError::InvalidData(
                "label anchor must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
