mod engine;
mod frame_builder;

pub use engine::ChartEngine;
pub use frame_builder::build_chart_frame;
