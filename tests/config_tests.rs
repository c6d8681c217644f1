use std::io::Write;

use vitals_dashboard::DashboardError;
use vitals_dashboard::api::{ChartMargins, DashboardConfig, TooltipOffset};
use vitals_dashboard::core::{LineValuePolicy, RankWindow};
use vitals_dashboard::render::Palette;

#[test]
fn defaults_match_dashboard_layout() {
    let config = DashboardConfig::default();

    assert_eq!(config.bar.margins, ChartMargins::new(50.0, 50.0, 90.0, 50.0));
    assert_eq!(config.bar.band_padding, 0.1);
    assert_eq!(config.bar.label_rotation_deg, -45.0);
    assert_eq!(config.bar.palette, Palette::Paired);
    assert_eq!(config.bar.tooltip_offset, TooltipOffset::new(10.0, -10.0));

    assert_eq!(config.pie.margins, ChartMargins::uniform(30.0));
    assert_eq!(config.pie.rank_window, RankWindow { skip: 1, take: 5 });
    assert_eq!(config.pie.palette, Palette::Set2);
    assert_eq!(config.pie.tooltip_offset, TooltipOffset::new(0.0, -30.0));

    assert_eq!(config.line.margins, ChartMargins::new(20.0, 30.0, 50.0, 50.0));
    assert_eq!(config.line.value_policy, LineValuePolicy::PinnedToBirth);
    assert_eq!(config.line.palette, Palette::Category10);
    assert_eq!(config.line.tooltip_offset, TooltipOffset::new(5.0, -120.0));
    config.validate().expect("defaults are valid");
}

#[test]
fn empty_json_yields_defaults() {
    let config = DashboardConfig::from_json_str("{}").expect("config");
    assert_eq!(config, DashboardConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let config = DashboardConfig::from_json_str(
        r#"{
            "line": { "value_policy": "FollowSelection", "stroke_width": 2.5 },
            "pie": { "rank_window": { "skip": 0, "take": 3 } }
        }"#,
    )
    .expect("config");

    assert_eq!(config.line.value_policy, LineValuePolicy::FollowSelection);
    assert_eq!(config.line.stroke_width, 2.5);
    assert_eq!(config.line.margins, DashboardConfig::default().line.margins);
    assert_eq!(config.pie.rank_window, RankWindow { skip: 0, take: 3 });
    assert_eq!(config.bar, DashboardConfig::default().bar);
}

#[test]
fn invalid_values_are_rejected() {
    for raw in [
        r#"{ "bar": { "band_padding": 1.5 } }"#,
        r#"{ "line": { "stroke_width": 0 } }"#,
        r#"{ "pie": { "margins": { "top": -1, "right": 0, "bottom": 0, "left": 0 } } }"#,
        r#"{ "line": { "hover_tolerance_px": -2 } }"#,
        r#"{ "bar": { "value_tick_count": 2000000000 } }"#,
        r#"{ "line": { "value_tick_count": 0 } }"#,
    ] {
        let err = DashboardConfig::from_json_str(raw).expect_err(raw);
        assert!(matches!(err, DashboardError::Config(_)), "{raw}: {err}");
    }
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = DashboardConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, DashboardError::Config(_)));
}

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{ "bar": {{ "label_rotation_deg": -30 }} }}"#).expect("write config");

    let config = DashboardConfig::from_path(file.path()).expect("config");
    assert_eq!(config.bar.label_rotation_deg, -30.0);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = DashboardConfig::from_path(dir.path().join("absent.json")).expect_err("missing");
    assert!(matches!(err, DashboardError::Io(_)));
}

#[test]
fn tick_count_bounds_are_inclusive() {
    for count in [1, 100] {
        let raw = format!(r#"{{ "bar": {{ "value_tick_count": {count} }}, "line": {{ "value_tick_count": {count} }} }}"#);
        DashboardConfig::from_json_str(&raw).expect(&raw);
    }
    let raw = r#"{ "line": { "value_tick_count": 101 } }"#;
    assert!(matches!(
        DashboardConfig::from_json_str(raw),
        Err(DashboardError::Config(_))
    ));
}
