use serde::{Deserialize, Serialize};

use crate::core::palette::ColorScheme;
use crate::core::types::Viewport;

/// Chart kind requested by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
    Doughnut,
    Area,
    Scatter,
}

/// Fixed dimension presets that override explicit width/height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    Sm,
    Md,
    Lg,
    Xl,
}

impl SizePreset {
    #[must_use]
    pub const fn viewport(self) -> Viewport {
        match self {
            Self::Sm => Viewport::new(300.0, 200.0),
            Self::Md => Viewport::new(400.0, 300.0),
            Self::Lg => Viewport::new(500.0, 400.0),
            Self::Xl => Viewport::new(600.0, 500.0),
        }
    }
}

/// Chart configuration supplied alongside the dataset.
///
/// Every field except `chart_type` has a serde default so partial JSON
/// configs from the web layer deserialize cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_preset: Option<SizePreset>,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default = "default_show_legend")]
    pub show_legend: bool,
    #[serde(default = "default_show_values")]
    pub show_values: bool,
    #[serde(default)]
    pub show_percentage: bool,
}

impl ChartSpec {
    /// Creates a 400x300 spec with legend and values shown.
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            width: default_width(),
            height: default_height(),
            size_preset: None,
            color_scheme: ColorScheme::default(),
            show_legend: default_show_legend(),
            show_values: default_show_values(),
            show_percentage: false,
        }
    }

    #[must_use]
    pub fn with_chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = chart_type;
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets a size preset; it takes precedence over explicit dimensions.
    #[must_use]
    pub fn with_size_preset(mut self, preset: SizePreset) -> Self {
        self.size_preset = Some(preset);
        self
    }

    #[must_use]
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    #[must_use]
    pub fn with_values(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }

    #[must_use]
    pub fn with_percentage(mut self, show: bool) -> Self {
        self.show_percentage = show;
        self
    }

    /// Effective drawing area after applying the size preset.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.size_preset
            .map_or(Viewport::new(self.width, self.height), SizePreset::viewport)
    }
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self::new(ChartType::default())
    }
}

fn default_width() -> f64 {
    400.0
}

fn default_height() -> f64 {
    300.0
}

fn default_show_legend() -> bool {
    true
}

fn default_show_values() -> bool {
    true
}
