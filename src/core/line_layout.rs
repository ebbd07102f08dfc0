use serde::{Deserialize, Serialize};

use crate::core::normalize::NormalizedDataset;
use crate::core::types::{Point, Viewport};

/// Inset applied on every side of the line plot.
pub const LINE_PADDING_PX: f64 = 40.0;
/// Radius of the per-point circle marker.
pub const LINE_MARKER_RADIUS_PX: f64 = 4.0;

/// Deterministic geometry for a line series.
///
/// `points[i]` is the marker center for dataset entry `i`; the polyline
/// connects them in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub points: Vec<Point>,
    pub marker_radius: f64,
}

impl LineGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            marker_radius: LINE_MARKER_RADIUS_PX,
        }
    }
}

/// Spreads points evenly across the padded plot width and scales their
/// height against the normalized max.
///
/// A single point sits on the left padding edge. Negative values are pinned to
/// the plot baseline.
#[must_use]
pub fn layout_line(data: &NormalizedDataset<'_>, viewport: Viewport) -> LineGeometry {
    if data.is_empty() {
        return LineGeometry::empty();
    }

    let plot_width = viewport.width - 2.0 * LINE_PADDING_PX;
    let plot_height = viewport.height - 2.0 * LINE_PADDING_PX;
    let max_value = data.scale_reference();
    let last_index = data.len().saturating_sub(1);

    let points = data
        .points()
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = if last_index == 0 {
                LINE_PADDING_PX
            } else {
                LINE_PADDING_PX + (i as f64 / last_index as f64) * plot_width
            };
            let ratio = (point.value / max_value).clamp(0.0, 1.0);
            let y = LINE_PADDING_PX + plot_height - ratio * plot_height;
            Point::new(x, y)
        })
        .collect();

    LineGeometry {
        points,
        marker_radius: LINE_MARKER_RADIUS_PX,
    }
}
