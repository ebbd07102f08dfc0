use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::chart_spec::ChartType;
use crate::core::types::DataPoint;

/// Which aggregate a chart type scales against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleKind {
    /// Largest value; used by bar/line/area/scatter.
    Max,
    /// Sum of non-negative values; used by pie/doughnut.
    Total,
}

impl ScaleKind {
    #[must_use]
    pub fn for_chart_type(chart_type: ChartType) -> Self {
        match chart_type {
            ChartType::Pie | ChartType::Doughnut => Self::Total,
            ChartType::Bar | ChartType::Line | ChartType::Area | ChartType::Scatter => Self::Max,
        }
    }
}

/// Sum of the non-negative values of a dataset.
///
/// The sum is kept in units of the largest value, so finite inputs whose
/// plain sum would overflow still yield exact shares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositiveTotal {
    unit: f64,
    scaled: f64,
}

impl PositiveTotal {
    pub const ZERO: Self = Self {
        unit: 1.0,
        scaled: 0.0,
    };

    /// Computes the total of `max(value, 0)` over finite `points`.
    #[must_use]
    pub fn of(points: &[DataPoint]) -> Self {
        let unit = points
            .iter()
            .map(|point| OrderedFloat(point.value))
            .max()
            .map_or(0.0, |max| max.0);
        if !(unit > 0.0 && unit.is_finite()) {
            return Self::ZERO;
        }
        let scaled = points.iter().map(|point| point.value.max(0.0) / unit).sum();
        Self { unit, scaled }
    }

    /// Total as a plain `f64`; infinite when it exceeds `f64::MAX`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.unit * self.scaled
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.scaled <= 0.0
    }

    /// Base-10 logarithm of the total, finite even when `value()` overflows.
    #[must_use]
    pub fn log10(&self) -> f64 {
        self.unit.log10() + self.scaled.log10()
    }

    /// Share of the total held by `value`, in percent; 0 for negative values
    /// or a zero total.
    #[must_use]
    pub fn percentage(&self, value: f64) -> f64 {
        if self.is_zero() {
            0.0
        } else {
            value.max(0.0) / self.unit / self.scaled * 100.0
        }
    }
}

/// Dataset paired with the divisor every layout scales by.
///
/// `scale_reference` is always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedDataset<'a> {
    points: &'a [DataPoint],
    kind: ScaleKind,
    raw_reference: f64,
    scale_reference: f64,
    total: PositiveTotal,
    degenerate: bool,
}

impl<'a> NormalizedDataset<'a> {
    #[must_use]
    pub fn empty(kind: ScaleKind) -> Self {
        Self {
            points: &[],
            kind,
            raw_reference: 0.0,
            scale_reference: 1.0,
            total: PositiveTotal::ZERO,
            degenerate: false,
        }
    }

    #[must_use]
    pub fn points(&self) -> &'a [DataPoint] {
        self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// Safe divisor (max or total, with degenerate values replaced by 1).
    #[must_use]
    pub fn scale_reference(&self) -> f64 {
        self.scale_reference
    }

    /// Max or total as computed, before the safe-divisor substitution.
    #[must_use]
    pub fn raw_reference(&self) -> f64 {
        self.raw_reference
    }

    /// Total of the non-negative values, whatever the scale kind.
    #[must_use]
    pub fn total(&self) -> PositiveTotal {
        self.total
    }

    /// Percentage of the positive total held by `value`.
    #[must_use]
    pub fn share_percentage(&self, value: f64) -> f64 {
        self.total.percentage(value)
    }

    /// True when the scale reference could not be used and was replaced by 1.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

/// Validates `points` and computes the scale reference for `chart_type`.
///
/// Empty datasets and datasets containing non-finite values normalize to an
/// empty dataset. A max that is not positive, or a zero total, is replaced by 1.
#[must_use]
pub fn normalize(points: &[DataPoint], chart_type: ChartType) -> NormalizedDataset<'_> {
    let kind = ScaleKind::for_chart_type(chart_type);
    if points.is_empty() {
        return NormalizedDataset::empty(kind);
    }

    if let Some((index, point)) = points
        .iter()
        .enumerate()
        .find(|(_, point)| !point.value.is_finite())
    {
        warn!(
            index,
            label = %point.label,
            "dropping dataset with non-finite value"
        );
        return NormalizedDataset::empty(kind);
    }

    let total = PositiveTotal::of(points);
    let (raw_reference, degenerate) = match kind {
        ScaleKind::Max => {
            let max = points
                .iter()
                .map(|point| OrderedFloat(point.value))
                .max()
                .map_or(0.0, |max| max.0);
            (max, max <= 0.0)
        }
        ScaleKind::Total => (total.value(), total.is_zero()),
    };

    let scale_reference = if raw_reference > 0.0 && raw_reference.is_finite() {
        raw_reference
    } else {
        1.0
    };
    trace!(
        count = points.len(),
        ?kind,
        raw_reference,
        scale_reference,
        "normalized dataset"
    );

    NormalizedDataset {
        points,
        kind,
        raw_reference,
        scale_reference,
        total,
        degenerate,
    }
}
