use serde::{Deserialize, Serialize};

use crate::core::normalize::NormalizedDataset;
use crate::core::types::Viewport;

/// Share of the chart height available to bars.
pub const BAR_PLOT_HEIGHT_RATIO: f64 = 0.7;
/// Fixed strip at the bottom reserved for category labels.
pub const BAR_LABEL_BAND_PX: f64 = 30.0;
/// Share of each slot occupied by the bar.
pub const BAR_WIDTH_RATIO: f64 = 0.8;
/// Share of each slot left as spacing, split evenly on both sides of the bar.
pub const BAR_SPACING_RATIO: f64 = 0.2;

/// Deterministic bar geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width * 0.5
    }

    /// Bottom edge, i.e. the bar baseline above the label band.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Lays bars out left-to-right in dataset order.
///
/// Each slot of `width / n` pixels holds one bar of 80% of the slot, centered
/// by half the remaining spacing on each side. Heights scale against the
/// normalized max into 70% of the chart height; negative values collapse to
/// zero-height bars on the baseline.
#[must_use]
pub fn layout_bars(data: &NormalizedDataset<'_>, viewport: Viewport) -> Vec<BarGeometry> {
    if data.is_empty() {
        return Vec::new();
    }

    let slot = viewport.width / data.len() as f64;
    let bar_width = slot * BAR_WIDTH_RATIO;
    let spacing = slot * BAR_SPACING_RATIO;
    let max_bar_height = viewport.height * BAR_PLOT_HEIGHT_RATIO;
    let max_value = data.scale_reference();

    data.points()
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let ratio = (point.value / max_value).clamp(0.0, 1.0);
            let height = ratio * max_bar_height;
            BarGeometry {
                x: i as f64 * (bar_width + spacing) + spacing / 2.0,
                y: viewport.height - height - BAR_LABEL_BAND_PX,
                width: bar_width,
                height,
            }
        })
        .collect()
}
