use tracing::{debug, warn};

use crate::core::{ChartSpec, DataPoint, LayoutKind, PaletteRegistry, compute_layout, normalize};
use crate::render::{ChartFrame, Legend, build_center_label, build_labels, emit_primitives};

/// Computes the complete frame for `points` under `spec`.
///
/// This is a pure function: identical inputs always produce identical frames,
/// and no input makes it fail. Empty or malformed datasets and unusable
/// dimensions yield a frame without geometry.
#[must_use]
pub fn build_chart_frame(
    points: &[DataPoint],
    spec: &ChartSpec,
    palettes: &PaletteRegistry,
) -> ChartFrame {
    let viewport = spec.viewport();
    let assigner = palettes.assigner(spec.color_scheme);
    let mut frame = ChartFrame::empty(viewport);
    let data = normalize(points, spec.chart_type);

    if spec.show_legend {
        frame.legend = Some(Legend::build(&data, assigner, spec.show_percentage));
    }

    if !viewport.is_valid() {
        warn!(
            width = viewport.width,
            height = viewport.height,
            "skipping chart geometry for unusable viewport"
        );
        return frame;
    }

    if data.is_empty() {
        debug!(chart_type = ?spec.chart_type, "no data to lay out");
        return frame;
    }
    if data.is_degenerate() {
        debug!(
            raw_reference = data.raw_reference(),
            "degenerate scale reference replaced by 1"
        );
    }

    let layout = compute_layout(&data, spec.chart_type, viewport);
    let emitted = emit_primitives(&layout, &data, assigner);

    frame.layout = Some(LayoutKind::for_chart_type(spec.chart_type));
    frame.labels = build_labels(&layout, &data, spec);
    frame.center_label = build_center_label(&layout, &data);
    frame.primitives = emitted.primitives;
    frame.series = emitted.series;

    debug!(
        chart_type = ?spec.chart_type,
        primitives = frame.primitives.len(),
        labels = frame.labels.len(),
        "built chart frame"
    );
    frame
}
