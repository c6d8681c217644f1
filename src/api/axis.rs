use crate::core::ticks::{format_tick, linear_ticks};
use crate::core::{BandScale, LinearScale};
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

pub(super) const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
pub(super) const AXIS_FONT_PX: f64 = 10.0;
const AXIS_STROKE_PX: f64 = 1.0;
const TICK_SIZE_PX: f64 = 6.0;
const TICK_LABEL_GAP_PX: f64 = 9.0;

/// Left value axis; `origin` is the plot area's top-left in container pixels.
pub(super) fn push_value_axis_left(
    frame: &mut RenderFrame,
    origin: (f64, f64),
    scale: LinearScale,
    tick_count: usize,
) {
    let (ox, oy) = origin;
    let (range_start, range_end) = scale.range();
    frame.lines.push(LinePrimitive::new(
        ox,
        oy + range_start,
        ox,
        oy + range_end,
        AXIS_STROKE_PX,
        AXIS_COLOR,
    ));

    let (domain_start, domain_end) = scale.domain();
    for tick in linear_ticks(domain_start, domain_end, tick_count) {
        let y = oy + scale.map(tick);
        frame.lines.push(LinePrimitive::new(
            ox - TICK_SIZE_PX,
            y,
            ox,
            y,
            AXIS_STROKE_PX,
            AXIS_COLOR,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick(tick),
            ox - TICK_LABEL_GAP_PX,
            y,
            AXIS_FONT_PX,
            AXIS_COLOR,
            TextHAlign::Right,
        ));
    }
}

/// Bottom categorical axis at plot-relative `baseline_y`, labels rotated.
pub(super) fn push_band_axis_bottom(
    frame: &mut RenderFrame,
    origin: (f64, f64),
    baseline_y: f64,
    plot_width: f64,
    band: &BandScale,
    rotation_deg: f64,
) {
    let (ox, oy) = origin;
    let y = oy + baseline_y;
    frame.lines.push(LinePrimitive::new(
        ox,
        y,
        ox + plot_width,
        y,
        AXIS_STROKE_PX,
        AXIS_COLOR,
    ));

    let align = if rotation_deg < 0.0 {
        TextHAlign::Right
    } else if rotation_deg > 0.0 {
        TextHAlign::Left
    } else {
        TextHAlign::Center
    };
    for category in band.categories() {
        let Some(position) = band.position(category) else {
            continue;
        };
        let x = ox + position + band.bandwidth() / 2.0;
        frame.lines.push(LinePrimitive::new(
            x,
            y,
            x,
            y + TICK_SIZE_PX,
            AXIS_STROKE_PX,
            AXIS_COLOR,
        ));
        if category.is_empty() {
            continue;
        }
        frame.texts.push(
            TextPrimitive::new(
                category,
                x,
                y + TICK_LABEL_GAP_PX + AXIS_FONT_PX * 0.3,
                AXIS_FONT_PX,
                AXIS_COLOR,
                align,
            )
            .rotated(rotation_deg),
        );
    }
}

/// Unlabeled horizontal line at value zero, for charts with negative values.
pub(super) fn push_zero_baseline(
    frame: &mut RenderFrame,
    origin: (f64, f64),
    plot_width: f64,
    scale: LinearScale,
) {
    let (ox, oy) = origin;
    let y = oy + scale.map(0.0);
    frame.lines.push(LinePrimitive::new(
        ox,
        y,
        ox + plot_width,
        y,
        AXIS_STROKE_PX,
        AXIS_COLOR,
    ));
}

/// Bottom time axis with one centered label per tick.
pub(super) fn push_time_axis_bottom(
    frame: &mut RenderFrame,
    origin: (f64, f64),
    baseline_y: f64,
    x_scale: LinearScale,
    ticks: &[(f64, String)],
) {
    let (ox, oy) = origin;
    let y = oy + baseline_y;
    let (range_start, range_end) = x_scale.range();
    frame.lines.push(LinePrimitive::new(
        ox + range_start,
        y,
        ox + range_end,
        y,
        AXIS_STROKE_PX,
        AXIS_COLOR,
    ));

    for (time, label) in ticks {
        let x = ox + x_scale.map(*time);
        frame.lines.push(LinePrimitive::new(
            x,
            y,
            x,
            y + TICK_SIZE_PX,
            AXIS_STROKE_PX,
            AXIS_COLOR,
        ));
        frame.texts.push(TextPrimitive::new(
            label.clone(),
            x,
            y + TICK_LABEL_GAP_PX + AXIS_FONT_PX * 0.5,
            AXIS_FONT_PX,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
    }
}
