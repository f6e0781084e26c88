use chart_lines::api::MultiLineGraph;
use chart_lines::core::{
    OptionValue, OptionsMap, merge_options, options, options_from_json_str,
    options_to_json_pretty,
};
use chart_lines::error::ChartError;

#[test]
fn options_parse_heterogeneous_json_scalars() {
    let parsed = options_from_json_str(
        r#"{"line_width": 2, "line_visible": false, "marker_shape": "dot"}"#,
    )
    .expect("parse options");

    assert_eq!(parsed.get("line_width"), Some(&OptionValue::Number(2.0)));
    assert_eq!(parsed.get("line_visible"), Some(&OptionValue::Flag(false)));
    assert_eq!(
        parsed.get("marker_shape"),
        Some(&OptionValue::Text("dot".to_owned()))
    );
    let keys: Vec<&str> = parsed.keys().map(String::as_str).collect();
    assert_eq!(keys, ["line_width", "line_visible", "marker_shape"]);
}

#[test]
fn malformed_options_json_is_reported() {
    let err = options_from_json_str(r#"{"line_width": [1, 2]}"#).expect_err("array value");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn options_json_feeds_graph_construction() {
    let settings = options_from_json_str(r#"{"line_width": 3, "line_curve": 0.5}"#)
        .expect("parse settings");
    let graph = MultiLineGraph::new(640.0, 480.0, settings, OptionsMap::new())
        .expect("graph init");

    assert_eq!(graph.resolved_options().line_width, 3.0);
    assert_eq!(graph.line_curve(), 0.5);

    let json = options_to_json_pretty(graph.settings()).expect("serialize settings");
    assert!(json.contains("\"line_width\": 3.0"));
}

#[test]
fn merge_overlay_wins_and_inputs_stay_unchanged() {
    let base = options([("line_curve", 0.0), ("line_width", 1.0)]);
    let overlay = options([("line_curve", 0.7)]);

    let merged = merge_options(&base, &overlay);

    assert_eq!(merged, options([("line_curve", 0.7), ("line_width", 1.0)]));
    assert_eq!(base, options([("line_curve", 0.0), ("line_width", 1.0)]));
    assert_eq!(overlay, options([("line_curve", 0.7)]));
}
