#![cfg(feature = "cairo-backend")]

use brand_charts::core::{ChartSpec, ChartType, ColorToken, DataPoint};
use brand_charts::render::CairoRenderer;
use brand_charts::{ChartEngine, ChartError};
use cairo::{Context, Format, ImageSurface};

fn brand_mentions() -> Vec<DataPoint> {
    vec![
        DataPoint::new("positive", 60.0),
        DataPoint::new("neutral", 25.0),
        DataPoint::new("negative", 15.0),
    ]
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 300).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_doughnut_slices_hole_and_labels() {
    let renderer = CairoRenderer::new(400, 300).expect("renderer");
    let mut engine = ChartEngine::new(renderer, ChartSpec::new(ChartType::Doughnut));
    engine.set_data(brand_mentions());

    engine.render().expect("render");
    let stats = engine.into_renderer().last_stats();

    assert_eq!(stats.primitives_drawn, 3);
    assert_eq!(stats.series_drawn, 1);
    assert_eq!(stats.labels_drawn, 4);
}

#[test]
fn cairo_renderer_rejects_non_hex_color_tokens() {
    let renderer = CairoRenderer::new(400, 300).expect("renderer");
    let mut engine = ChartEngine::new(renderer, ChartSpec::new(ChartType::Bar));
    engine.set_data(vec![DataPoint::new("a", 1.0).with_color("var(--brand-500)")]);

    let err = engine.render().expect_err("css variables are not drawable");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let mut renderer = engine.into_renderer();
    assert!(renderer.set_background(ColorToken::new("white")).is_err());
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(400, 300).expect("renderer");
    let mut engine = ChartEngine::new(renderer, ChartSpec::new(ChartType::Line));
    engine.set_data(brand_mentions());

    let surface = ImageSurface::create(Format::ARgb32, 400, 300).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");

    let stats = engine.into_renderer().last_stats();
    assert_eq!(stats.primitives_drawn, 3);
    assert_eq!(stats.series_drawn, 1);
}
