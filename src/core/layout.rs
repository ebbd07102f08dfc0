use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::bar_layout::{BarGeometry, layout_bars};
use crate::core::chart_spec::ChartType;
use crate::core::line_layout::{LineGeometry, layout_line};
use crate::core::normalize::NormalizedDataset;
use crate::core::pie_layout::{PieGeometry, layout_pie};
use crate::core::types::Viewport;

/// Layout algorithm a chart type resolves to.
///
/// Area and scatter have no geometry of their own and resolve to `Line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutKind {
    Bar,
    Pie,
    Doughnut,
    Line,
}

impl LayoutKind {
    #[must_use]
    pub fn for_chart_type(chart_type: ChartType) -> Self {
        match chart_type {
            ChartType::Bar => Self::Bar,
            ChartType::Pie => Self::Pie,
            ChartType::Doughnut => Self::Doughnut,
            ChartType::Line | ChartType::Area | ChartType::Scatter => Self::Line,
        }
    }
}

/// Per-type layout output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartLayout {
    Bar(Vec<BarGeometry>),
    Pie(PieGeometry),
    Doughnut(PieGeometry),
    Line(LineGeometry),
}

impl ChartLayout {
    #[must_use]
    pub fn kind(&self) -> LayoutKind {
        match self {
            Self::Bar(_) => LayoutKind::Bar,
            Self::Pie(_) => LayoutKind::Pie,
            Self::Doughnut(_) => LayoutKind::Doughnut,
            Self::Line(_) => LayoutKind::Line,
        }
    }

    /// Number of per-entry geometries; equals the dataset length.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bar(bars) => bars.len(),
            Self::Pie(pie) | Self::Doughnut(pie) => pie.slices.len(),
            Self::Line(line) => line.points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Computes geometry for `data` inside `viewport` using the algorithm for `chart_type`.
#[must_use]
pub fn compute_layout(
    data: &NormalizedDataset<'_>,
    chart_type: ChartType,
    viewport: Viewport,
) -> ChartLayout {
    let kind = LayoutKind::for_chart_type(chart_type);
    trace!(?chart_type, ?kind, count = data.len(), "compute layout");

    match kind {
        LayoutKind::Bar => ChartLayout::Bar(layout_bars(data, viewport)),
        LayoutKind::Pie => ChartLayout::Pie(layout_pie(data, viewport, false)),
        LayoutKind::Doughnut => ChartLayout::Doughnut(layout_pie(data, viewport, true)),
        LayoutKind::Line => ChartLayout::Line(layout_line(data, viewport)),
    }
}
