use serde::{Deserialize, Serialize};

use crate::core::{ColorAssigner, ColorToken, NormalizedDataset};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: ColorToken,
    pub value: f64,
    /// Share of the positive total, present when percentages are shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

/// Legend model mirroring dataset order.
///
/// Built from the normalized dataset, so a malformed dataset yields no entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    #[must_use]
    pub fn build(
        data: &NormalizedDataset<'_>,
        assigner: ColorAssigner<'_>,
        with_percentage: bool,
    ) -> Self {
        let entries = data
            .points()
            .iter()
            .enumerate()
            .map(|(i, point)| LegendEntry {
                label: point.label.clone(),
                color: assigner.assign_color(i, point),
                value: point.value,
                percentage: with_percentage.then(|| data.share_percentage(point.value)),
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for entry in &self.entries {
            let percentage_finite = entry.percentage.is_none_or(f64::is_finite);
            if !entry.value.is_finite() || !percentage_finite {
                return Err(ChartError::InvalidData(format!(
                    "legend entry `{}` has a non-finite value",
                    entry.label
                )));
            }
        }
        Ok(())
    }
}
