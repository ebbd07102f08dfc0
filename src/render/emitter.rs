use smallvec::smallvec;

use crate::core::{
    BarGeometry, ChartLayout, ColorAssigner, LineGeometry, NormalizedDataset, PieGeometry,
    SliceGeometry,
};
use crate::render::primitives::{
    GeometryPrimitive, PathCommand, PathCommands, PrimitiveTag, SeriesRole, SeriesShape, Shape,
};

/// Primitives produced from one layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmittedGeometry {
    /// Exactly one per dataset entry, in dataset order.
    pub primitives: Vec<GeometryPrimitive>,
    pub series: Vec<SeriesShape>,
}

/// Packages layout output into tagged primitives.
///
/// Bars become rects, slices become paths and line points become circle
/// markers; the line connector and the doughnut hole are series shapes.
#[must_use]
pub fn emit_primitives(
    layout: &ChartLayout,
    data: &NormalizedDataset<'_>,
    assigner: ColorAssigner<'_>,
) -> EmittedGeometry {
    let shapes: Vec<Shape> = match layout {
        ChartLayout::Bar(bars) => bars.iter().map(bar_shape).collect(),
        ChartLayout::Pie(pie) | ChartLayout::Doughnut(pie) => {
            pie.slices.iter().map(slice_shape).collect()
        }
        ChartLayout::Line(line) => marker_shapes(line),
    };

    let primitives = shapes
        .into_iter()
        .zip(data.points())
        .enumerate()
        .map(|(data_index, (shape, point))| GeometryPrimitive {
            shape,
            tag: PrimitiveTag {
                data_index,
                label: point.label.clone(),
                value: point.value,
                color: assigner.assign_color(data_index, point),
            },
        })
        .collect();

    let series = match layout {
        ChartLayout::Line(line) if !line.points.is_empty() => vec![SeriesShape {
            role: SeriesRole::Connector,
            shape: Shape::Polyline {
                points: line.points.clone(),
            },
            color: Some(assigner.palette_color(0).clone()),
        }],
        ChartLayout::Doughnut(pie) if !pie.slices.is_empty() => vec![hole_shape(pie)],
        _ => Vec::new(),
    };

    EmittedGeometry { primitives, series }
}

fn bar_shape(bar: &BarGeometry) -> Shape {
    Shape::Rect {
        x: bar.x,
        y: bar.y,
        width: bar.width,
        height: bar.height,
    }
}

fn marker_shapes(line: &LineGeometry) -> Vec<Shape> {
    line.points
        .iter()
        .map(|p| Shape::Circle {
            cx: p.x,
            cy: p.y,
            r: line.marker_radius,
        })
        .collect()
}

fn hole_shape(pie: &PieGeometry) -> SeriesShape {
    SeriesShape {
        role: SeriesRole::DoughnutHole,
        shape: Shape::Circle {
            cx: pie.center.x,
            cy: pie.center.y,
            r: pie.inner_radius,
        },
        color: None,
    }
}

/// Outline: center, line to the start point, clockwise arc to the end point, close.
///
/// A full-circle slice is split into two half arcs because an arc between
/// coincident endpoints renders nothing.
fn slice_shape(slice: &SliceGeometry) -> Shape {
    let commands: PathCommands = if slice.is_full_circle() {
        let start = slice.start_point();
        let opposite = slice
            .center
            .on_circle(slice.radius, slice.start_angle + std::f64::consts::PI);
        smallvec![
            PathCommand::MoveTo(slice.center),
            PathCommand::LineTo(start),
            PathCommand::ArcTo {
                radius: slice.radius,
                large_arc: false,
                clockwise: true,
                to: opposite,
            },
            PathCommand::ArcTo {
                radius: slice.radius,
                large_arc: false,
                clockwise: true,
                to: start,
            },
            PathCommand::Close,
        ]
    } else {
        smallvec![
            PathCommand::MoveTo(slice.center),
            PathCommand::LineTo(slice.start_point()),
            PathCommand::ArcTo {
                radius: slice.radius,
                large_arc: slice.large_arc(),
                clockwise: true,
                to: slice.end_point(),
            },
            PathCommand::Close,
        ]
    };

    Shape::Path {
        commands,
        slice: *slice,
    }
}
