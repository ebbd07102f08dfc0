use tracing::{debug, trace};

use crate::core::{ChartSpec, DataPoint, PaletteRegistry};
use crate::error::ChartResult;
use crate::interaction::{DataPointClickHandler, InteractionMapper, PrimitiveEvent, hit_test};
use crate::render::{ChartFrame, PrimitiveTag, Renderer};

use super::build_chart_frame;

/// Facade tying dataset, spec, palettes and a rendering backend together.
///
/// Every frame is recomputed from the current inputs; nothing is cached.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    spec: ChartSpec,
    palettes: PaletteRegistry,
    points: Vec<DataPoint>,
    mapper: InteractionMapper,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn new(renderer: R, spec: ChartSpec) -> Self {
        Self::with_palettes(renderer, spec, PaletteRegistry::default())
    }

    #[must_use]
    pub fn with_palettes(renderer: R, spec: ChartSpec, palettes: PaletteRegistry) -> Self {
        Self {
            renderer,
            spec,
            palettes,
            points: Vec::new(),
            mapper: InteractionMapper::new(),
        }
    }

    /// Replaces the dataset.
    pub fn set_data(&mut self, points: Vec<DataPoint>) {
        debug!(count = points.len(), "set chart data");
        self.points = points;
    }

    pub fn append_point(&mut self, point: DataPoint) {
        self.points.push(point);
        trace!(count = self.points.len(), "append data point");
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn set_spec(&mut self, spec: ChartSpec) {
        debug!(chart_type = ?spec.chart_type, "set chart spec");
        self.spec = spec;
    }

    #[must_use]
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    pub fn set_palettes(&mut self, palettes: PaletteRegistry) {
        self.palettes = palettes;
    }

    #[must_use]
    pub fn palettes(&self) -> &PaletteRegistry {
        &self.palettes
    }

    #[must_use]
    pub fn build_frame(&self) -> ChartFrame {
        build_chart_frame(&self.points, &self.spec, &self.palettes)
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    /// Tag of the primitive under `(x, y)` in the current frame.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<PrimitiveTag> {
        let frame = self.build_frame();
        hit_test(&frame, x, y).cloned()
    }

    /// Routes a primitive-tagged pointer event to `handler`.
    ///
    /// Returns the dispatched index, or `None` when the index is stale.
    pub fn dispatch_event<H>(&self, event: PrimitiveEvent, handler: &mut H) -> Option<usize>
    where
        H: DataPointClickHandler + ?Sized,
    {
        self.mapper.dispatch(&self.points, event, handler)
    }

    /// Hit-tests `(x, y)` and dispatches a click on the match.
    pub fn dispatch_click_at<H>(&self, x: f64, y: f64, handler: &mut H) -> Option<usize>
    where
        H: DataPointClickHandler + ?Sized,
    {
        let frame = self.build_frame();
        self.mapper
            .dispatch_at(&frame, &self.points, x, y, handler)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(feature = "cairo-backend")]
impl<R> ChartEngine<R>
where
    R: Renderer + crate::render::CairoContextRenderer,
{
    /// Renders the current frame into an external Cairo context.
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()> {
        let frame = self.build_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }
}
