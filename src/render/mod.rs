mod emitter;
mod frame;
mod json_contract;
mod labels;
mod legend;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use emitter::{EmittedGeometry, emit_primitives};
pub use frame::ChartFrame;
pub use json_contract::{CHART_FRAME_JSON_SCHEMA_V1, ChartFrameJsonContractV1};
pub use labels::{
    build_center_label, build_labels, format_percentage, format_positive_total, format_total,
    format_value,
};
pub use legend::{Legend, LegendEntry};
pub use null_renderer::NullRenderer;
pub use primitives::{
    GeometryPrimitive, LabelPrimitive, LabelRole, PathCommand, PathCommands, PrimitiveTag,
    SeriesRole, SeriesShape, Shape, TextAnchor, svg_path_data,
};
pub use svg_backend::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `ChartFrame` so
/// drawing code stays isolated from layout and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
