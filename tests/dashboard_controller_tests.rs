use std::sync::Arc;

use vitals_dashboard::api::{
    ChartKind, ChartOutput, DashboardConfig, DashboardController, DashboardSnapshot,
    DashboardState, SELECT_BAR_VARIABLE_PROMPT, SELECT_LINE_VARIABLE_PROMPT,
    SELECT_PIE_VARIABLE_PROMPT, SELECT_REGION_PROMPT,
};
use vitals_dashboard::core::variable::NO_VARIABLE_LABEL;
use vitals_dashboard::core::{Dataset, LineValuePolicy, VariableKey, Viewport};
use vitals_dashboard::render::{NullRenderer, SvgRenderer};

const ALL_CHARTS: [ChartKind; 3] = [ChartKind::Line, ChartKind::Bar, ChartKind::Pie];

fn dashboard_with(config: DashboardConfig) -> DashboardController {
    let dataset = Arc::new(Dataset::bundled().expect("bundled dataset"));
    let mut dashboard = DashboardController::new(dataset, config).expect("controller");
    for chart in ALL_CHARTS {
        dashboard
            .resize(chart, Viewport::new(800, 500))
            .expect("resize");
    }
    dashboard
}

fn dashboard() -> DashboardController {
    dashboard_with(DashboardConfig::default())
}

#[test]
fn initial_state_shows_prompts() {
    let dashboard = dashboard();
    assert_eq!(dashboard.state(), DashboardState::Displayed);
    assert!(dashboard.pending().regions.is_empty());
    assert!(dashboard.committed().regions.is_empty());

    assert_eq!(
        dashboard.line_output(),
        ChartOutput::Placeholder(SELECT_REGION_PROMPT)
    );
    assert_eq!(
        dashboard.bar_output(),
        ChartOutput::Placeholder(SELECT_BAR_VARIABLE_PROMPT)
    );
    assert_eq!(
        dashboard.pie_output(),
        ChartOutput::Placeholder(SELECT_PIE_VARIABLE_PROMPT)
    );
}

#[test]
fn pending_edits_do_not_render_until_confirm() {
    let mut dashboard = dashboard();
    dashboard.toggle_region("서울");
    dashboard.select_bar_variable("출생수");
    dashboard.select_pie_variable("죽음수");

    assert_eq!(dashboard.state(), DashboardState::Editing);
    assert_eq!(dashboard.pending().bar, Some(VariableKey::Birth));
    assert_eq!(dashboard.committed().bar, None);
    assert_eq!(
        dashboard.line_output().placeholder(),
        Some(SELECT_REGION_PROMPT)
    );
    assert_eq!(
        dashboard.bar_output().placeholder(),
        Some(SELECT_BAR_VARIABLE_PROMPT)
    );

    dashboard.confirm().expect("confirm");
    assert_eq!(dashboard.state(), DashboardState::Displayed);
    assert_eq!(dashboard.committed(), dashboard.pending());
    for chart in ALL_CHARTS {
        assert!(dashboard.output(chart).frame().is_some(), "{chart:?}");
    }
}

#[test]
fn edits_after_confirm_leave_charts_alone() {
    let mut dashboard = dashboard();
    dashboard.set_regions(["서울", "부산"]);
    dashboard.select_bar_variable("출생수");
    dashboard.confirm().expect("confirm");
    let before = dashboard.bar_chart().data().to_vec();
    assert_eq!(before.len(), 2);

    dashboard.toggle_region("대구");
    dashboard.select_bar_variable("이혼수");
    assert_eq!(dashboard.state(), DashboardState::Editing);
    assert_eq!(dashboard.bar_chart().data(), before.as_slice());
    assert_eq!(dashboard.line_chart().series().len(), 2);

    dashboard.confirm().expect("confirm");
    assert_eq!(dashboard.bar_chart().data().len(), 3);
    assert_eq!(dashboard.line_chart().series().len(), 3);
}

#[test]
fn bar_without_regions_shows_every_region() {
    let mut dashboard = dashboard();
    dashboard.select_bar_variable("결혼수");
    dashboard.confirm().expect("confirm");

    assert_eq!(dashboard.bar_chart().data().len(), 18);
    let output = dashboard.bar_output();
    assert_eq!(output.frame().expect("frame").rects.len(), 18);
    assert_eq!(
        dashboard.line_output().placeholder(),
        Some(SELECT_REGION_PROMPT)
    );
}

#[test]
fn pie_skips_nationwide_total() {
    let mut dashboard = dashboard();
    dashboard.select_pie_variable("출생수");
    dashboard.confirm().expect("confirm");

    let wedges = dashboard.pie_chart().data();
    assert_eq!(wedges.len(), 5);
    assert!(wedges.iter().all(|w| w.region != "Whole country"));
    assert!(wedges.windows(2).all(|pair| pair[0].value >= pair[1].value));
}

#[test]
fn selecting_none_label_clears_variable() {
    let mut dashboard = dashboard();
    dashboard.select_pie_variable("출생수");
    dashboard.confirm().expect("confirm");
    assert!(dashboard.pie_output().frame().is_some());

    dashboard.select_pie_variable(NO_VARIABLE_LABEL);
    dashboard.confirm().expect("confirm");
    assert_eq!(
        dashboard.pie_output().placeholder(),
        Some(SELECT_PIE_VARIABLE_PROMPT)
    );
    assert!(dashboard.pie_chart().data().is_empty());
}

#[test]
fn pinned_to_birth_policy_draws_line_without_line_variable() {
    let mut dashboard = dashboard();
    dashboard.toggle_region("서울");
    dashboard.select_line_variable("죽음수");
    dashboard.confirm().expect("confirm");

    let seoul_births: Vec<f64> = dashboard
        .dataset()
        .records()
        .iter()
        .filter(|r| r.region == "Seoul")
        .map(|r| r.birth)
        .collect();
    let plotted: Vec<f64> = dashboard.line_chart().series()[0]
        .points
        .iter()
        .map(|p| p.value)
        .collect();
    assert_eq!(plotted, seoul_births);

    dashboard.select_line_variable(NO_VARIABLE_LABEL);
    dashboard.confirm().expect("confirm");
    assert!(dashboard.line_output().frame().is_some());
}

#[test]
fn follow_selection_policy_prompts_for_line_variable() {
    let config = DashboardConfig::default().with_line_value_policy(LineValuePolicy::FollowSelection);
    let mut dashboard = dashboard_with(config);
    dashboard.toggle_region("서울");
    dashboard.confirm().expect("confirm");
    assert_eq!(
        dashboard.line_output().placeholder(),
        Some(SELECT_LINE_VARIABLE_PROMPT)
    );

    dashboard.select_line_variable("죽음수");
    dashboard.confirm().expect("confirm");
    let seoul_deaths: Vec<f64> = dashboard
        .dataset()
        .records()
        .iter()
        .filter(|r| r.region == "Seoul")
        .map(|r| r.death)
        .collect();
    let plotted: Vec<f64> = dashboard.line_chart().series()[0]
        .points
        .iter()
        .map(|p| p.value)
        .collect();
    assert_eq!(plotted, seoul_deaths);
    assert!(dashboard.line_output().frame().is_some());
}

#[test]
fn resize_affects_only_that_chart() {
    let mut dashboard = dashboard();
    dashboard.set_regions(["서울"]);
    dashboard.select_bar_variable("출생수");
    dashboard.confirm().expect("confirm");

    dashboard
        .resize(ChartKind::Bar, Viewport::new(0, 0))
        .expect("resize");
    assert!(dashboard.bar_output().is_blank());
    assert!(dashboard.line_output().frame().is_some());

    dashboard
        .resize(ChartKind::Bar, Viewport::new(400, 300))
        .expect("resize");
    let mut renderer = NullRenderer::default();
    assert!(
        dashboard
            .bar_output()
            .render_with(&mut renderer)
            .expect("render")
    );
}

#[test]
fn committed_charts_render_to_svg() {
    let mut dashboard = dashboard();
    dashboard.set_regions(["서울", "부산"]);
    dashboard.select_bar_variable("출생수");
    dashboard.select_pie_variable("결혼수");
    dashboard.confirm().expect("confirm");

    for chart in ALL_CHARTS {
        let mut renderer = SvgRenderer::new();
        assert!(
            dashboard
                .output(chart)
                .render_with(&mut renderer)
                .expect("render")
        );
        assert!(renderer.document().starts_with("<svg"));
        assert!(renderer.document().trim_end().ends_with("</svg>"));
    }
}

#[test]
fn snapshot_json_round_trips_committed_state() {
    let mut dashboard = dashboard();
    dashboard.set_regions(["부산", "서울"]);
    dashboard.select_bar_variable("출생수");
    dashboard.confirm().expect("confirm");
    dashboard.toggle_region("대전");

    let json = dashboard.snapshot_json_pretty().expect("json");
    let snapshot: DashboardSnapshot = serde_json::from_str(&json).expect("parse snapshot");
    assert_eq!(snapshot, dashboard.snapshot());
    assert_eq!(snapshot.state, DashboardState::Editing);

    let committed: Vec<&str> = snapshot
        .committed
        .regions
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(committed, vec!["부산", "서울"]);
    assert_eq!(snapshot.pending.regions.len(), 3);
    assert_eq!(snapshot.bars.len(), 2);
    assert_eq!(snapshot.line.series.len(), 2);
    assert_eq!(snapshot.line.time_full_range, snapshot.line.time_visible_range);
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = DashboardConfig::default();
    config.line.stroke_width = 0.0;
    let dataset = Arc::new(Dataset::default());
    assert!(DashboardController::new(dataset, config).is_err());
}
