use brand_charts::core::{
    ChartSpec, ChartType, DataPoint, LayoutKind, PaletteRegistry, SizePreset, Viewport,
};
use brand_charts::render::{
    CHART_FRAME_JSON_SCHEMA_V1, ChartFrame, LegendEntry, NullRenderer, Renderer, SvgRenderer,
};
use brand_charts::{ChartEngine, ChartError, build_chart_frame};

fn brand_mentions() -> Vec<DataPoint> {
    vec![
        DataPoint::new("positive", 60.0),
        DataPoint::new("neutral", 25.0),
        DataPoint::new("negative", 15.0),
    ]
}

#[test]
fn null_renderer_receives_computed_frame_counts() {
    let spec = ChartSpec::new(ChartType::Doughnut);
    let mut engine = ChartEngine::new(NullRenderer::default(), spec);
    engine.set_data(brand_mentions());

    engine.render().expect("render");
    let renderer = engine.into_renderer();

    assert_eq!(renderer.last_primitive_count, 3);
    assert_eq!(renderer.last_series_count, 1);
    // Three value labels plus the center total.
    assert_eq!(renderer.last_label_count, 4);
    assert_eq!(renderer.frames_rendered, 1);
}

#[test]
fn empty_dataset_builds_empty_frame() {
    for chart_type in [ChartType::Bar, ChartType::Pie, ChartType::Doughnut, ChartType::Line] {
        let frame = build_chart_frame(&[], &ChartSpec::new(chart_type), &PaletteRegistry::default());
        assert!(frame.is_empty(), "{chart_type:?}");
        assert_eq!(frame.layout, None);
        frame.validate().expect("empty frame is valid");
    }
}

#[test]
fn non_finite_values_yield_empty_frame() {
    let data = vec![DataPoint::new("a", 10.0), DataPoint::new("b", f64::NAN)];
    let frame = build_chart_frame(&data, &ChartSpec::new(ChartType::Bar), &PaletteRegistry::default());
    assert!(frame.is_empty());

    let data = vec![DataPoint::new("a", f64::INFINITY)];
    let frame = build_chart_frame(&data, &ChartSpec::new(ChartType::Pie), &PaletteRegistry::default());
    assert!(frame.is_empty());
}

#[test]
fn malformed_dataset_gets_an_empty_legend() {
    let data = vec![DataPoint::new("a", 1.0), DataPoint::new("b", f64::NAN)];
    let spec = ChartSpec::new(ChartType::Pie).with_percentage(true);
    let frame = build_chart_frame(&data, &spec, &PaletteRegistry::default());

    assert!(frame.is_empty());
    assert_eq!(frame.legend.as_ref().map(|l| l.len()), Some(0));
    frame.validate().expect("malformed input still yields a valid frame");

    let json = frame.to_json_contract_v1_pretty().expect("serialize");
    let restored = ChartFrame::from_json_compat_str(&json).expect("deserialize");
    assert_eq!(restored, frame);
}

#[test]
fn validate_rejects_non_finite_legend_entries() {
    let mut frame = build_chart_frame(
        &brand_mentions(),
        &ChartSpec::new(ChartType::Bar),
        &PaletteRegistry::default(),
    );
    let legend = frame.legend.as_mut().expect("legend");
    legend.entries.push(LegendEntry {
        label: "broken".to_owned(),
        color: "#000000".into(),
        value: f64::NAN,
        percentage: None,
    });

    let err = frame.validate().expect_err("NaN legend value must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(NullRenderer::default().render(&frame).is_err());
}

#[test]
fn invalid_viewport_keeps_legend_only() {
    let spec = ChartSpec::new(ChartType::Bar).with_dimensions(0.0, 300.0);
    let frame = build_chart_frame(&brand_mentions(), &spec, &PaletteRegistry::default());

    assert!(frame.is_empty());
    assert_eq!(frame.legend.as_ref().map(|l| l.len()), Some(3));

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("empty frame renders");
    assert_eq!(renderer.last_primitive_count, 0);
}

#[test]
fn frame_building_is_idempotent() {
    let registry = PaletteRegistry::default();
    for chart_type in [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Doughnut,
        ChartType::Area,
        ChartType::Scatter,
    ] {
        let spec = ChartSpec::new(chart_type).with_percentage(true);
        let first = build_chart_frame(&brand_mentions(), &spec, &registry);
        let second = build_chart_frame(&brand_mentions(), &spec, &registry);
        assert_eq!(first, second, "{chart_type:?}");
        assert_eq!(first.layout, Some(LayoutKind::for_chart_type(chart_type)));
    }
}

#[test]
fn legend_mirrors_dataset_order_and_colors() {
    let spec = ChartSpec::new(ChartType::Pie).with_percentage(true);
    let frame = build_chart_frame(&brand_mentions(), &spec, &PaletteRegistry::default());
    let legend = frame.legend.as_ref().expect("legend");

    let labels: Vec<&str> = legend.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["positive", "neutral", "negative"]);
    for (entry, primitive) in legend.entries.iter().zip(&frame.primitives) {
        assert_eq!(entry.color, primitive.tag.color);
    }
    let percentage = legend.entries[1].percentage.expect("percentage");
    assert!((percentage - 25.0).abs() <= 1e-9);
}

#[test]
fn legend_is_omitted_when_hidden() {
    let spec = ChartSpec::new(ChartType::Bar)
        .with_legend(false)
        .with_percentage(false);
    let frame = build_chart_frame(&brand_mentions(), &spec, &PaletteRegistry::default());
    assert!(frame.legend.is_none());

    let frame = build_chart_frame(
        &brand_mentions(),
        &ChartSpec::new(ChartType::Bar),
        &PaletteRegistry::default(),
    );
    assert!(
        frame
            .legend
            .expect("legend")
            .entries
            .iter()
            .all(|e| e.percentage.is_none())
    );
}

#[test]
fn size_presets_map_to_fixed_viewports() {
    let cases = [
        (SizePreset::Sm, Viewport::new(300.0, 200.0)),
        (SizePreset::Md, Viewport::new(400.0, 300.0)),
        (SizePreset::Lg, Viewport::new(500.0, 400.0)),
        (SizePreset::Xl, Viewport::new(600.0, 500.0)),
    ];
    for (preset, viewport) in cases {
        let spec = ChartSpec::new(ChartType::Pie).with_size_preset(preset);
        let frame = build_chart_frame(&brand_mentions(), &spec, &PaletteRegistry::default());
        assert_eq!(frame.viewport, viewport);
    }
}

#[test]
fn chart_spec_deserializes_with_defaults() {
    let spec: ChartSpec =
        serde_json::from_str(r#"{"type": "doughnut", "color_scheme": "brand"}"#).expect("spec json");

    assert_eq!(spec.chart_type, ChartType::Doughnut);
    assert_eq!(spec.viewport(), Viewport::new(400.0, 300.0));
    assert!(spec.show_legend);
    assert!(spec.show_values);
    assert!(!spec.show_percentage);
}

#[test]
fn svg_renderer_tags_elements_with_data_index() {
    let data = vec![
        DataPoint::new("<b>good</b>", 60.0),
        DataPoint::new("bad", 40.0),
    ];
    let mut engine = ChartEngine::new(SvgRenderer::new(), ChartSpec::new(ChartType::Pie));
    engine.set_data(data);
    engine.render().expect("render svg");

    let svg = engine.renderer().document();
    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<path ").count(), 2);
    assert!(svg.contains(r#"data-index="0""#));
    assert!(svg.contains(r#"data-index="1""#));
    assert!(svg.contains("&lt;b&gt;good&lt;/b&gt;"));
    assert!(!svg.contains("<b>"));
}

#[test]
fn svg_renderer_draws_line_connector_and_doughnut_hole() {
    let renderer = SvgRenderer::new().with_background("#000000");

    let line = build_chart_frame(
        &brand_mentions(),
        &ChartSpec::new(ChartType::Line),
        &PaletteRegistry::default(),
    );
    let svg = renderer.to_svg_string(&line).expect("line svg");
    assert_eq!(svg.matches("<circle ").count(), 3);
    assert_eq!(svg.matches("<polyline ").count(), 1);
    // Connector is stroked beneath the markers.
    assert!(svg.find("<polyline ") < svg.find("<circle "));

    let doughnut = build_chart_frame(
        &brand_mentions(),
        &ChartSpec::new(ChartType::Doughnut),
        &PaletteRegistry::default(),
    );
    let svg = renderer.to_svg_string(&doughnut).expect("doughnut svg");
    assert!(svg.contains(r##"fill="#000000"/>"##));
    // Hole covers the slices.
    assert!(svg.rfind("<path ") < svg.find("<circle "));
    assert!(svg.contains(">100</text>"));
}

#[test]
fn json_contract_round_trip_preserves_frame() {
    let spec = ChartSpec::new(ChartType::Bar).with_percentage(true);
    let frame = build_chart_frame(&brand_mentions(), &spec, &PaletteRegistry::default());

    let json = frame.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {CHART_FRAME_JSON_SCHEMA_V1}")));

    let restored = ChartFrame::from_json_compat_str(&json).expect("deserialize");
    assert_eq!(restored.primitives.len(), frame.primitives.len());
    assert_eq!(restored.layout, frame.layout);
    for (restored, original) in restored.primitives.iter().zip(&frame.primitives) {
        assert_eq!(restored.tag, original.tag);
    }
    let texts = |f: &ChartFrame| f.labels.iter().map(|l| l.text.clone()).collect::<Vec<_>>();
    assert_eq!(texts(&restored), texts(&frame));
    restored.validate().expect("restored frame is valid");
}

#[test]
fn json_compat_accepts_bare_frame_and_rejects_unknown_version() {
    let frame = build_chart_frame(
        &brand_mentions(),
        &ChartSpec::new(ChartType::Line),
        &PaletteRegistry::default(),
    );
    let bare = serde_json::to_string(&frame).expect("bare json");
    let restored = ChartFrame::from_json_compat_str(&bare).expect("bare frame");
    assert_eq!(restored.primitives.len(), 3);

    let future = format!(r#"{{"schema_version": 2, "frame": {bare}}}"#);
    let err = ChartFrame::from_json_compat_str(&future).expect_err("unknown version");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn decimal_scores_feed_the_frame() {
    use rust_decimal::Decimal;

    let data = vec![
        DataPoint::from_decimal("q1", Decimal::new(125, 1)).expect("decimal"),
        DataPoint::from_decimal("q2", Decimal::new(375, 1)).expect("decimal"),
    ];
    let frame = build_chart_frame(&data, &ChartSpec::new(ChartType::Bar), &PaletteRegistry::default());
    let values: Vec<&str> = frame
        .labels
        .iter()
        .filter(|l| l.role == brand_charts::render::LabelRole::Value)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(values, vec!["12.5", "37.5"]);
}

#[test]
fn engine_recomputes_after_spec_change() {
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartSpec::new(ChartType::Bar));
    engine.set_data(brand_mentions());
    engine.append_point(DataPoint::new("mixed", 5.0));
    assert_eq!(engine.points().len(), 4);

    engine.render().expect("bar render");
    assert_eq!(engine.renderer().last_series_count, 0);

    engine.set_spec(ChartSpec::new(ChartType::Line));
    engine.render().expect("line render");
    assert_eq!(engine.renderer().last_primitive_count, 4);
    assert_eq!(engine.renderer().last_series_count, 1);
    assert_eq!(engine.renderer().frames_rendered, 2);
}
