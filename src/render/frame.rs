use serde::{Deserialize, Serialize};

use crate::core::{LayoutKind, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::legend::Legend;
use crate::render::primitives::{GeometryPrimitive, LabelPrimitive, SeriesShape};

/// Backend-agnostic scene for one chart draw pass.
///
/// Draw order is underlay `series` (line connectors), then `primitives`, then
/// overlay `series` (doughnut holes), then `labels`, then `center_label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub viewport: Viewport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutKind>,
    pub primitives: Vec<GeometryPrimitive>,
    pub series: Vec<SeriesShape>,
    pub labels: Vec<LabelPrimitive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_label: Option<LabelPrimitive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

impl ChartFrame {
    #[must_use]
    pub fn empty(viewport: Viewport) -> Self {
        Self {
            viewport,
            layout: None,
            primitives: Vec::new(),
            series: Vec::new(),
            labels: Vec::new(),
            center_label: None,
            legend: None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() && !self.is_empty() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for (position, primitive) in self.primitives.iter().enumerate() {
            if primitive.tag.data_index != position {
                return Err(ChartError::InvalidData(format!(
                    "primitive at position {position} is tagged with index {}",
                    primitive.tag.data_index
                )));
            }
            primitive.shape.validate()?;
        }
        for series in &self.series {
            series.shape.validate()?;
        }
        for label in self.labels.iter().chain(self.center_label.iter()) {
            label.validate()?;
        }
        if let Some(legend) = &self.legend {
            legend.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
            && self.series.is_empty()
            && self.labels.is_empty()
            && self.center_label.is_none()
    }

    /// Series shapes drawn before the primitives.
    pub fn underlay_series(&self) -> impl Iterator<Item = &SeriesShape> + '_ {
        self.series.iter().filter(|series| series.role.is_underlay())
    }

    /// Series shapes drawn after the primitives.
    pub fn overlay_series(&self) -> impl Iterator<Item = &SeriesShape> + '_ {
        self.series.iter().filter(|series| !series.role.is_underlay())
    }

    #[must_use]
    pub fn primitive(&self, data_index: usize) -> Option<&GeometryPrimitive> {
        self.primitives.get(data_index)
    }
}
