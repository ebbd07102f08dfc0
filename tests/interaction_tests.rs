use brand_charts::core::{ChartSpec, ChartType, DataPoint, PaletteRegistry};
use brand_charts::interaction::{InteractionMapper, PrimitiveEvent, hit_test};
use brand_charts::render::NullRenderer;
use brand_charts::{ChartEngine, build_chart_frame};

fn brand_mentions() -> Vec<DataPoint> {
    vec![
        DataPoint::new("positive", 60.0),
        DataPoint::new("neutral", 25.0),
        DataPoint::new("negative", 15.0),
    ]
}

#[test]
fn every_primitive_routes_back_to_its_data_point() {
    let points = brand_mentions();
    let mapper = InteractionMapper::new();

    for chart_type in [ChartType::Bar, ChartType::Pie, ChartType::Line] {
        let frame = build_chart_frame(&points, &ChartSpec::new(chart_type), &PaletteRegistry::default());
        for primitive in &frame.primitives {
            let mut seen = Vec::new();
            let dispatched = mapper.dispatch(
                &points,
                PrimitiveEvent::click(primitive.tag.data_index),
                &mut |point: &DataPoint, index: usize| seen.push((point.clone(), index)),
            );
            assert_eq!(dispatched, Some(primitive.tag.data_index));
            assert_eq!(
                seen,
                vec![(
                    points[primitive.tag.data_index].clone(),
                    primitive.tag.data_index
                )]
            );
        }
    }
}

#[test]
fn out_of_range_event_is_ignored() {
    let points = brand_mentions();
    let mut calls = 0_usize;
    let dispatched = InteractionMapper::new().dispatch(
        &points,
        PrimitiveEvent::tap(points.len()),
        &mut |_: &DataPoint, _: usize| calls += 1,
    );

    assert_eq!(dispatched, None);
    assert_eq!(calls, 0);
}

#[test]
fn stale_index_after_data_shrinks_is_ignored() {
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartSpec::new(ChartType::Bar));
    engine.set_data(brand_mentions());
    engine.set_data(vec![DataPoint::new("only", 1.0)]);

    let mut calls = 0_usize;
    let dispatched = engine.dispatch_event(
        PrimitiveEvent::click(2),
        &mut |_: &DataPoint, _: usize| calls += 1,
    );
    assert_eq!(dispatched, None);
    assert_eq!(calls, 0);
}

#[test]
fn bar_hit_test_resolves_rects() {
    let data = vec![DataPoint::new("A", 50.0), DataPoint::new("B", 100.0)];
    let frame = build_chart_frame(&data, &ChartSpec::new(ChartType::Bar), &PaletteRegistry::default());

    // Bar A spans x 20..180, y 165..270; bar B spans x 220..380, y 60..270.
    assert_eq!(hit_test(&frame, 100.0, 200.0).map(|t| t.data_index), Some(0));
    assert_eq!(hit_test(&frame, 300.0, 100.0).map(|t| t.data_index), Some(1));
    assert_eq!(hit_test(&frame, 100.0, 100.0), None);
    assert_eq!(hit_test(&frame, 200.0, 200.0), None);
}

#[test]
fn pie_hit_test_follows_clockwise_angles() {
    let frame = build_chart_frame(
        &brand_mentions(),
        &ChartSpec::new(ChartType::Pie),
        &PaletteRegistry::default(),
    );

    // Center (200, 150), radius 110. Slices cover 0..0.6, 0.6..0.85, 0.85..1 turn.
    assert_eq!(hit_test(&frame, 250.0, 150.0).map(|t| t.data_index), Some(0));
    assert_eq!(hit_test(&frame, 200.0, 200.0).map(|t| t.data_index), Some(0));
    assert_eq!(hit_test(&frame, 150.0, 150.0).map(|t| t.data_index), Some(1));
    assert_eq!(hit_test(&frame, 190.0, 100.0).map(|t| t.data_index), Some(2));
    assert_eq!(hit_test(&frame, 200.0, 10.0), None);
}

#[test]
fn doughnut_hole_hits_nothing() {
    let frame = build_chart_frame(
        &brand_mentions(),
        &ChartSpec::new(ChartType::Doughnut),
        &PaletteRegistry::default(),
    );

    assert_eq!(hit_test(&frame, 200.0, 150.0), None);
    assert_eq!(hit_test(&frame, 230.0, 150.0), None);
    // Ring between 66 and 110.
    assert_eq!(hit_test(&frame, 290.0, 150.0).map(|t| t.data_index), Some(0));
}

#[test]
fn line_hit_test_picks_marker_under_pointer() {
    let data = vec![
        DataPoint::new("mon", 20.0),
        DataPoint::new("tue", 80.0),
        DataPoint::new("wed", 40.0),
    ];
    let frame = build_chart_frame(&data, &ChartSpec::new(ChartType::Line), &PaletteRegistry::default());

    // Markers at (40, 205), (200, 40), (360, 150) with radius 4.
    assert_eq!(hit_test(&frame, 201.0, 41.0).map(|t| t.data_index), Some(1));
    assert_eq!(hit_test(&frame, 362.0, 150.0).map(|t| t.data_index), Some(2));
    assert_eq!(hit_test(&frame, 120.0, 120.0), None);
}

#[test]
fn engine_dispatches_click_at_pixel() {
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartSpec::new(ChartType::Bar));
    engine.set_data(vec![DataPoint::new("A", 50.0), DataPoint::new("B", 100.0)]);

    let mut clicked = None;
    let dispatched = engine.dispatch_click_at(300.0, 100.0, &mut |point: &DataPoint, index: usize| {
        clicked = Some((point.label.clone(), index));
    });

    assert_eq!(dispatched, Some(1));
    assert_eq!(clicked, Some(("B".to_owned(), 1)));
    assert_eq!(engine.hit_test(100.0, 200.0).map(|t| t.label), Some("A".to_owned()));
}

#[test]
fn non_finite_pointer_hits_nothing() {
    let frame = build_chart_frame(
        &brand_mentions(),
        &ChartSpec::new(ChartType::Pie),
        &PaletteRegistry::default(),
    );
    assert_eq!(hit_test(&frame, f64::NAN, 150.0), None);
}
