use approx::assert_relative_eq;
use vitals_dashboard::api::{BarChartConfig, BarChartView, PieChartConfig, PieChartView};
use vitals_dashboard::core::{BarDatum, PieDatum, Viewport};
use vitals_dashboard::render::{NullRenderer, Renderer};

fn bars() -> Vec<BarDatum> {
    vec![
        BarDatum {
            region: "Seoul".to_owned(),
            value: 100.0,
        },
        BarDatum {
            region: "Busan".to_owned(),
            value: 50.0,
        },
    ]
}

fn wedges() -> Vec<PieDatum> {
    [("B", 90.0), ("C", 80.0), ("D", 70.0), ("E", 60.0), ("F", 50.0)]
        .into_iter()
        .map(|(region, value)| PieDatum {
            region: region.to_owned(),
            value,
        })
        .collect()
}

fn bar_view(viewport: Viewport) -> BarChartView {
    let mut view = BarChartView::new(BarChartConfig::default());
    view.set_data(bars()).expect("set data");
    view.resize(viewport).expect("resize");
    view
}

#[test]
fn bar_frame_has_one_rect_per_bar_and_rotated_labels() {
    let view = bar_view(Viewport::new(800, 500));
    let output = view.output();
    let frame = output.frame().expect("frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.rects.len(), 2);
    let label = frame
        .texts
        .iter()
        .find(|t| t.text == "Seoul")
        .expect("category label");
    assert_relative_eq!(label.rotation_deg, -45.0);

    // 700px wide plot, two bands with padding 0.1.
    let step = 700.0 / 2.1;
    assert_relative_eq!(frame.rects[0].x, 50.0 + (700.0 - step * 1.9) / 2.0, epsilon = 1e-9);
    assert_relative_eq!(frame.rects[0].width, step * 0.9, epsilon = 1e-9);
    assert_relative_eq!(frame.rects[0].y, 50.0, epsilon = 1e-9);
    assert_relative_eq!(frame.rects[0].height, 360.0, epsilon = 1e-9);
    assert_relative_eq!(frame.rects[1].height, 180.0, epsilon = 1e-9);
}

#[test]
fn bar_hover_shows_tooltip_and_leave_clears_it() {
    let mut view = bar_view(Viewport::new(800, 500));
    let first = view.output().frame().expect("frame").rects[0];

    let (x, y) = (first.x + first.width / 2.0, first.y + 200.0);
    view.pointer_move(x, y);
    assert_eq!(view.hovered(), Some(0));
    let tooltip = view.tooltip().expect("tooltip");
    assert_eq!(tooltip.text, "Seoul: 100");
    assert_relative_eq!(tooltip.x, x + 10.0);
    assert_relative_eq!(tooltip.y, y - 10.0);

    let output = view.output();
    let frame = output.frame().expect("frame");
    assert_relative_eq!(frame.rects[0].fill_color.alpha, 0.7);
    assert_relative_eq!(frame.rects[1].fill_color.alpha, 1.0);
    assert!(frame.tooltip.is_some());

    view.pointer_leave();
    assert!(view.tooltip().is_none());
    assert_eq!(view.hovered(), None);
    assert!(view.output().frame().expect("frame").tooltip.is_none());
}

#[test]
fn bar_hover_above_short_bar_misses() {
    let mut view = bar_view(Viewport::new(800, 500));
    let second = view.output().frame().expect("frame").rects[1];
    view.pointer_move(second.x + 5.0, second.y - 20.0);
    assert_eq!(view.hovered(), None);
    assert!(view.tooltip().is_none());
}

#[test]
fn negative_bars_extend_below_zero() {
    let mut view = BarChartView::new(BarChartConfig::default());
    view.set_data(vec![
        BarDatum {
            region: "Up".to_owned(),
            value: 30.0,
        },
        BarDatum {
            region: "Down".to_owned(),
            value: -10.0,
        },
    ])
    .expect("set data");
    view.resize(Viewport::new(800, 500)).expect("resize");

    let output = view.output();
    let frame = output.frame().expect("frame");
    // Domain [-10, 30] over 360px: zero sits at 270px from the plot top.
    let zero_y = 50.0 + 270.0;
    assert_relative_eq!(frame.rects[0].y + frame.rects[0].height, zero_y, epsilon = 1e-9);
    assert_relative_eq!(frame.rects[1].y, zero_y, epsilon = 1e-9);
    assert_relative_eq!(frame.rects[1].height, 90.0, epsilon = 1e-9);
}

#[test]
fn bar_zero_size_renders_nothing_then_recovers() {
    let mut view = bar_view(Viewport::new(0, 500));
    assert!(view.output().is_blank());

    view.resize(Viewport::new(800, 0)).expect("resize");
    assert!(view.output().is_blank());

    view.resize(Viewport::new(640, 480)).expect("resize");
    let mut renderer = NullRenderer::default();
    assert!(view.output().render_with(&mut renderer).expect("render"));
    assert_eq!(renderer.frames_rendered, 1);
    assert!(renderer.last_primitive_count > 2);
}

#[test]
fn bar_margins_larger_than_container_render_nothing() {
    let view = bar_view(Viewport::new(90, 120));
    assert!(view.output().is_blank());
}

fn pie_view(viewport: Viewport) -> PieChartView {
    let mut view = PieChartView::new(PieChartConfig::default());
    view.set_data(wedges());
    view.resize(viewport);
    view
}

#[test]
fn pie_frame_has_wedges_labels_and_connectors() {
    let view = pie_view(Viewport::new(460, 460));
    let output = view.output();
    let frame = output.frame().expect("frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.wedges.len(), 5);
    assert_eq!(frame.texts.len(), 5);
    assert_eq!(frame.polylines.len(), 5);

    let first = frame.wedges[0];
    assert_relative_eq!(first.center_x, 230.0);
    assert_relative_eq!(first.center_y, 230.0);
    assert_relative_eq!(first.outer_radius, 160.0);
    assert_relative_eq!(first.start_angle, 0.0);
    assert_relative_eq!(
        frame.wedges[4].end_angle,
        std::f64::consts::TAU,
        epsilon = 1e-9
    );

    // First wedge's middle is on the right half, so its label sits at +r.
    let label = frame.texts.iter().find(|t| t.text == "B").expect("label");
    assert_relative_eq!(label.x, 430.0);
    let connector = &frame.polylines[0];
    assert_eq!(connector.points.len(), 3);
    assert_relative_eq!(connector.points[2].0, 230.0 + 190.0);
}

#[test]
fn pie_hover_reports_wedge_value() {
    let mut view = pie_view(Viewport::new(460, 460));

    view.pointer_move(280.0, 180.0);
    assert_eq!(view.hit_test(280.0, 180.0), Some(0));
    let tooltip = view.tooltip().expect("tooltip");
    assert_eq!(tooltip.text, "90");
    assert_relative_eq!(tooltip.x, 280.0);
    assert_relative_eq!(tooltip.y, 150.0);

    view.pointer_move(230.0 + 170.0, 230.0);
    assert!(view.tooltip().is_none());

    view.pointer_move(280.0, 180.0);
    view.pointer_leave();
    assert!(view.tooltip().is_none());
}

#[test]
fn pie_zero_size_renders_nothing_then_recovers() {
    let mut view = pie_view(Viewport::new(0, 0));
    assert!(view.output().is_blank());
    assert_eq!(view.hit_test(0.0, 0.0), None);

    view.resize(Viewport::new(300, 300));
    let mut renderer = NullRenderer::default();
    let output = view.output();
    renderer
        .render(output.frame().expect("frame"))
        .expect("render");
    assert_eq!(renderer.frames_rendered, 1);
}

#[test]
fn pie_with_fewer_entries_is_not_padded() {
    let mut view = PieChartView::new(PieChartConfig::default());
    view.set_data(wedges().into_iter().take(2).collect());
    view.resize(Viewport::new(300, 300));
    let output = view.output();
    assert_eq!(output.frame().expect("frame").wedges.len(), 2);
}
