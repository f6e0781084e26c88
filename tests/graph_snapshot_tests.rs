use chart_lines::api::{GraphSnapshot, GraphVariant};
use chart_lines::core::{DataPoint, LineSegmentKind, LineSeries, OptionsMap, options};
use chart_lines::error::ChartError;

#[test]
fn snapshot_reports_channels_and_resolution() {
    let mut graph = GraphVariant::stepped_multi_line()
        .create_variant(
            800.0,
            400.0,
            options([("line_width", 2.0)]),
            OptionsMap::new(),
        )
        .expect("variant init");
    graph
        .add_series(LineSeries::new(
            "cpu",
            vec![DataPoint::new(0.0, 1.0), DataPoint::new(1.0, 2.0)],
        ))
        .expect("add series");

    let snapshot = graph.snapshot();
    assert_eq!(snapshot.settings, options([("line_width", 2.0)]));
    assert_eq!(snapshot.fixed_settings, options([("line_curve", 0.0)]));
    assert_eq!(snapshot.resolved.line_width, 2.0);
    assert_eq!(snapshot.segment_kind, LineSegmentKind::Stepped);
    assert_eq!(snapshot.series_names, vec!["cpu".to_owned()]);

    let json = graph
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    assert!(json.contains("\"schema_version\": 1"));

    let restored = GraphSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(restored, snapshot);

    let bare = snapshot.to_json_pretty().expect("serialize bare");
    let restored = GraphSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(restored, snapshot);
}

#[test]
fn snapshot_rejects_unknown_schema_version() {
    let graph = GraphVariant::stepped_line()
        .create_variant(800.0, 400.0, OptionsMap::new(), OptionsMap::new())
        .expect("variant init");

    let json = graph
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract")
        .replace("\"schema_version\": 1", "\"schema_version\": 2");

    let err = GraphSnapshot::from_json_compat_str(&json).expect_err("schema v2");
    assert_eq!(
        err,
        ChartError::InvalidData("unsupported snapshot schema version: 2".to_owned())
    );
}
