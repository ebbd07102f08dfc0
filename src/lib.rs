//! brand-charts: deterministic chart layout engine.
//!
//! Turns a labeled dataset and a [`ChartSpec`](core::ChartSpec) into tagged
//! drawing primitives for bar, line, pie and doughnut charts (area and scatter
//! reuse the line layout). Layout is a pure function of its inputs; rendering
//! backends and pointer handling sit on either side of it.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, build_chart_frame};
pub use error::{ChartError, ChartResult};
