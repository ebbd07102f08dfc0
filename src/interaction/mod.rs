//! Maps pointer events on rendered primitives back to data points.
//!
//! The mapper is stateless: every event is resolved against the dataset the
//! host passes in, so a stale primitive from a previous render can never reach
//! the callback with an index the current dataset does not have.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{DataPoint, Point};
use crate::render::{ChartFrame, PrimitiveTag, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Click,
    Tap,
}

/// Pointer event already resolved to the primitive it landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitiveEvent {
    pub kind: PointerKind,
    pub data_index: usize,
}

impl PrimitiveEvent {
    #[must_use]
    pub const fn click(data_index: usize) -> Self {
        Self {
            kind: PointerKind::Click,
            data_index,
        }
    }

    #[must_use]
    pub const fn tap(data_index: usize) -> Self {
        Self {
            kind: PointerKind::Tap,
            data_index,
        }
    }
}

/// Receiver of `on_data_point_click(dataPoint, index)`.
///
/// Invoked synchronously on the caller's thread; implementations should not
/// block.
pub trait DataPointClickHandler {
    fn on_data_point_click(&mut self, point: &DataPoint, index: usize);
}

impl<F> DataPointClickHandler for F
where
    F: FnMut(&DataPoint, usize),
{
    fn on_data_point_click(&mut self, point: &DataPoint, index: usize) {
        self(point, index);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionMapper;

impl InteractionMapper {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Invokes `handler` once with `(points[index], index)`.
    ///
    /// Returns the dispatched index, or `None` when the event points outside
    /// `points` and was ignored.
    pub fn dispatch<H>(
        &self,
        points: &[DataPoint],
        event: PrimitiveEvent,
        handler: &mut H,
    ) -> Option<usize>
    where
        H: DataPointClickHandler + ?Sized,
    {
        let index = event.data_index;
        let Some(point) = points.get(index) else {
            debug!(
                index,
                len = points.len(),
                kind = ?event.kind,
                "ignoring pointer event outside dataset bounds"
            );
            return None;
        };

        trace!(index, label = %point.label, "dispatch data point click");
        handler.on_data_point_click(point, index);
        Some(index)
    }

    /// Hit-tests `(x, y)` against `frame` and dispatches a click on the match.
    pub fn dispatch_at<H>(
        &self,
        frame: &ChartFrame,
        points: &[DataPoint],
        x: f64,
        y: f64,
        handler: &mut H,
    ) -> Option<usize>
    where
        H: DataPointClickHandler + ?Sized,
    {
        let tag = hit_test(frame, x, y)?;
        self.dispatch(points, PrimitiveEvent::click(tag.data_index), handler)
    }
}

/// Tag of the primitive under `(x, y)`.
///
/// Later primitives are drawn on top, so they win. Points inside a doughnut
/// hole hit nothing. When several circle markers overlap the pointer, the
/// closest center wins.
#[must_use]
pub fn hit_test(frame: &ChartFrame, x: f64, y: f64) -> Option<&PrimitiveTag> {
    let point = Point::new(x, y);
    if !point.is_finite() {
        return None;
    }

    let markers_hit = frame
        .primitives
        .iter()
        .filter_map(|primitive| match primitive.shape {
            Shape::Circle { cx, cy, r } => {
                let distance = Point::new(cx, cy).distance_to(point);
                (distance <= r).then_some((primitive, distance))
            }
            _ => None,
        })
        .min_by_key(|(_, distance)| OrderedFloat(*distance));
    if let Some((primitive, _)) = markers_hit {
        return Some(&primitive.tag);
    }

    frame
        .primitives
        .iter()
        .rev()
        .find(|primitive| primitive.shape.contains(point))
        .map(|primitive| &primitive.tag)
}
