use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::core::normalize::NormalizedDataset;
use crate::core::types::{Point, Viewport};

/// Gap kept between the pie and the viewport edge.
pub const PIE_MARGIN_PX: f64 = 40.0;
/// Doughnut hole radius as a share of the outer radius.
pub const DOUGHNUT_HOLE_RATIO: f64 = 0.6;

/// One pie/doughnut slice.
///
/// Angles are radians measured clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceGeometry {
    pub center: Point,
    pub radius: f64,
    pub inner_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub percentage: f64,
}

impl SliceGeometry {
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) * 0.5
    }

    /// SVG large-arc flag: set when the slice covers more than half the circle.
    #[must_use]
    pub fn large_arc(&self) -> bool {
        self.percentage > 50.0
    }

    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        self.percentage >= 100.0
    }

    #[must_use]
    pub fn start_point(&self) -> Point {
        self.center.on_circle(self.radius, self.start_angle)
    }

    #[must_use]
    pub fn end_point(&self) -> Point {
        self.center.on_circle(self.radius, self.end_angle)
    }

    /// Whether `point` lies inside the slice ring.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let distance = self.center.distance_to(point);
        if distance > self.radius || distance < self.inner_radius || self.span() <= 0.0 {
            return false;
        }
        let mut angle = (point.x - self.center.x).atan2(self.center.y - point.y);
        if angle < 0.0 {
            angle += TAU;
        }
        angle >= self.start_angle && angle < self.end_angle
    }
}

/// Complete pie/doughnut geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieGeometry {
    pub center: Point,
    pub radius: f64,
    pub inner_radius: f64,
    pub slices: Vec<SliceGeometry>,
}

/// Partitions the circle into slices in dataset order.
///
/// Slice `i` covers `value_i / total` of the circle; negative values and a
/// zero total yield zero-span slices so every entry keeps its slice. Shares
/// come from the overflow-safe total, so huge finite values still split the
/// circle exactly.
#[must_use]
pub fn layout_pie(data: &NormalizedDataset<'_>, viewport: Viewport, doughnut: bool) -> PieGeometry {
    let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
    let radius = (viewport.width.min(viewport.height) / 2.0 - PIE_MARGIN_PX).max(0.0);
    let inner_radius = if doughnut {
        radius * DOUGHNUT_HOLE_RATIO
    } else {
        0.0
    };

    let mut cumulative_percentage = 0.0_f64;
    let mut slices = Vec::with_capacity(data.len());
    for point in data.points() {
        let remaining = (100.0 - cumulative_percentage).max(0.0);
        let percentage = data.share_percentage(point.value).min(remaining);
        let start_angle = cumulative_percentage / 100.0 * TAU;
        let end_angle = (cumulative_percentage + percentage) / 100.0 * TAU;
        slices.push(SliceGeometry {
            center,
            radius,
            inner_radius,
            start_angle,
            end_angle,
            percentage,
        });
        cumulative_percentage += percentage;
    }

    PieGeometry {
        center,
        radius,
        inner_radius,
        slices,
    }
}
