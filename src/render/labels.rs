//! Label anchors for values, percentages, categories and the doughnut total.
//!
//! Only positions and text are produced here; fonts and colors belong to the
//! rendering surface.

use crate::core::bar_layout::BAR_LABEL_BAND_PX;
use crate::core::{
    ChartLayout, ChartSpec, DataPoint, NormalizedDataset, PieGeometry, Point, PositiveTotal,
};
use crate::render::primitives::{LabelPrimitive, LabelRole, TextAnchor};

const VALUE_LABEL_OFFSET_PX: f64 = 5.0;
const MARKER_LABEL_OFFSET_PX: f64 = 10.0;
/// Radius ratio at which pie labels sit.
const PIE_LABEL_RADIUS_RATIO: f64 = 0.7;
/// Magnitude from which values switch to scientific notation.
const SCIENTIFIC_THRESHOLD: f64 = 1e15;

/// Formats a value with at most two decimals and no trailing zeros.
///
/// Magnitudes of `1e15` and above use scientific notation with two decimals.
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() || value.abs() >= SCIENTIFIC_THRESHOLD {
        return format!("{value:.2e}");
    }
    let scaled = (value * 100.0).round();
    let rounded = scaled / 100.0;
    // Avoid printing "-0".
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}

#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

/// Doughnut center text: the dataset total rounded to an integer.
#[must_use]
pub fn format_total(total: f64) -> String {
    format_value(total.round())
}

/// Like [`format_total`], but also covers totals that overflow `f64`.
#[must_use]
pub fn format_positive_total(total: PositiveTotal) -> String {
    let value = total.value();
    if value.is_finite() {
        return format_total(value);
    }

    let log10 = total.log10();
    let mut exponent = log10.floor();
    let mut mantissa = 10f64.powf(log10 - exponent);
    if mantissa >= 9.995 {
        mantissa /= 10.0;
        exponent += 1.0;
    }
    format!("{mantissa:.2}e{exponent}")
}

fn value_text(spec: &ChartSpec, value: f64, percentage: f64) -> Option<String> {
    match (spec.show_values, spec.show_percentage) {
        (true, true) => Some(format!(
            "{} ({})",
            format_value(value),
            format_percentage(percentage)
        )),
        (true, false) => Some(format_value(value)),
        (false, true) => Some(format_percentage(percentage)),
        (false, false) => None,
    }
}

/// Builds the text labels for `layout`, in dataset order.
#[must_use]
pub fn build_labels(
    layout: &ChartLayout,
    data: &NormalizedDataset<'_>,
    spec: &ChartSpec,
) -> Vec<LabelPrimitive> {
    let points = data.points();
    let viewport = spec.viewport();
    let mut labels = Vec::new();

    match layout {
        ChartLayout::Bar(bars) => {
            for (i, (bar, point)) in bars.iter().zip(points).enumerate() {
                if !point.label.is_empty() {
                    labels.push(LabelPrimitive {
                        text: point.label.clone(),
                        anchor: Point::new(
                            bar.center_x(),
                            viewport.height - BAR_LABEL_BAND_PX / 3.0,
                        ),
                        align: TextAnchor::Middle,
                        role: LabelRole::Category,
                        data_index: Some(i),
                    });
                }
                if let Some(text) =
                    value_text(spec, point.value, data.share_percentage(point.value))
                {
                    labels.push(LabelPrimitive {
                        text,
                        anchor: Point::new(bar.center_x(), bar.y - VALUE_LABEL_OFFSET_PX),
                        align: TextAnchor::Middle,
                        role: LabelRole::Value,
                        data_index: Some(i),
                    });
                }
            }
        }
        ChartLayout::Pie(pie) | ChartLayout::Doughnut(pie) => {
            push_slice_labels(&mut labels, pie, points, spec);
        }
        ChartLayout::Line(line) => {
            for (i, (marker, point)) in line.points.iter().zip(points).enumerate() {
                if let Some(text) =
                    value_text(spec, point.value, data.share_percentage(point.value))
                {
                    labels.push(LabelPrimitive {
                        text,
                        anchor: Point::new(marker.x, marker.y - MARKER_LABEL_OFFSET_PX),
                        align: TextAnchor::Middle,
                        role: LabelRole::Value,
                        data_index: Some(i),
                    });
                }
            }
        }
    }

    labels
}

fn push_slice_labels(
    labels: &mut Vec<LabelPrimitive>,
    pie: &PieGeometry,
    points: &[DataPoint],
    spec: &ChartSpec,
) {
    let label_radius = if pie.inner_radius > 0.0 {
        (pie.inner_radius + pie.radius) * 0.5
    } else {
        pie.radius * PIE_LABEL_RADIUS_RATIO
    };

    for (i, (slice, point)) in pie.slices.iter().zip(points).enumerate() {
        if slice.span() <= 0.0 {
            continue;
        }
        if let Some(text) = value_text(spec, point.value, slice.percentage) {
            labels.push(LabelPrimitive {
                text,
                anchor: pie.center.on_circle(label_radius, slice.mid_angle()),
                align: TextAnchor::Middle,
                role: LabelRole::Value,
                data_index: Some(i),
            });
        }
    }
}

/// Center label for doughnut charts; always reflects the dataset total.
#[must_use]
pub fn build_center_label(layout: &ChartLayout, data: &NormalizedDataset<'_>) -> Option<LabelPrimitive> {
    match layout {
        ChartLayout::Doughnut(pie) if !data.is_empty() => Some(LabelPrimitive {
            text: format_positive_total(data.total()),
            anchor: pie.center,
            align: TextAnchor::Middle,
            role: LabelRole::CenterTotal,
            data_index: None,
        }),
        _ => None,
    }
}
