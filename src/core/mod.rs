pub mod bar_layout;
pub mod chart_spec;
pub mod layout;
pub mod line_layout;
pub mod normalize;
pub mod palette;
pub mod pie_layout;
pub mod types;

pub use bar_layout::{BarGeometry, layout_bars};
pub use chart_spec::{ChartSpec, ChartType, SizePreset};
pub use layout::{ChartLayout, LayoutKind, compute_layout};
pub use line_layout::{LineGeometry, layout_line};
pub use normalize::{NormalizedDataset, PositiveTotal, ScaleKind, normalize};
pub use palette::{ColorAssigner, ColorScheme, ColorToken, Palette, PaletteRegistry};
pub use pie_layout::{PieGeometry, SliceGeometry, layout_pie};
pub use types::{DataPoint, Dataset, Point, Viewport};
