use std::f64::consts::TAU;
use std::fmt::Write as _;

use tracing::trace;

use crate::error::{DashboardError, DashboardResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, WedgePrimitive};

const TOOLTIP_FONT_PX: f64 = 12.0;
const TOOLTIP_PADDING_PX: f64 = 6.0;
const TOOLTIP_CHAR_WIDTH_PX: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub rects_drawn: usize,
    pub wedges_drawn: usize,
    pub polylines_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
    pub tooltip_drawn: bool,
}

/// Serializes frames into standalone SVG documents.
///
/// Each `render` call discards the previous document and writes a new one
/// from scratch.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    background: Option<Color>,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    pub fn set_background(&mut self, color: Option<Color>) -> DashboardResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.background = color;
        Ok(())
    }

    /// Last rendered document; empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_frame(&self, frame: &RenderFrame) -> Result<(String, SvgRenderStats), std::fmt::Error> {
        let mut out = String::new();
        let mut stats = SvgRenderStats::default();
        let (width, height) = (frame.viewport.width, frame.viewport.height);

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
        )?;

        let clips: Vec<_> = frame.polylines.iter().filter_map(|p| p.clip).collect();
        if !clips.is_empty() {
            out.push_str("<defs>\n");
            for (idx, clip) in clips.iter().enumerate() {
                writeln!(
                    out,
                    r#"<clipPath id="clip-{idx}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
                    num(clip.x),
                    num(clip.y),
                    num(clip.width),
                    num(clip.height)
                )?;
            }
            out.push_str("</defs>\n");
        }

        if let Some(background) = self.background {
            writeln!(
                out,
                r#"<rect x="0" y="0" width="{width}" height="{height}" {}/>"#,
                paint("fill", background)
            )?;
        }

        for rect in &frame.rects {
            let border = rect
                .border_color
                .map(|color| format!(" {}", paint("stroke", color)))
                .unwrap_or_default();
            writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" {}{border}/>"#,
                num(rect.x),
                num(rect.y),
                num(rect.width),
                num(rect.height),
                paint("fill", rect.fill_color)
            )?;
            stats.rects_drawn += 1;
        }

        for wedge in &frame.wedges {
            if wedge.end_angle - wedge.start_angle <= 0.0 {
                continue;
            }
            writeln!(
                out,
                r#"<path d="{}" {}/>"#,
                wedge_path(wedge),
                paint("fill", wedge.fill_color)
            )?;
            stats.wedges_drawn += 1;
        }

        let mut clip_idx = 0;
        for polyline in &frame.polylines {
            let points = polyline
                .points
                .iter()
                .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
                .collect::<Vec<_>>()
                .join(" ");
            let clip = if polyline.clip.is_some() {
                let attr = format!(r#" clip-path="url(#clip-{clip_idx})""#);
                clip_idx += 1;
                attr
            } else {
                String::new()
            };
            writeln!(
                out,
                r#"<polyline points="{points}" fill="none" {} stroke-width="{}"{clip}/>"#,
                paint("stroke", polyline.color),
                num(polyline.stroke_width)
            )?;
            stats.polylines_drawn += 1;
        }

        for line in &frame.lines {
            writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-width="{}"/>"#,
                num(line.x1),
                num(line.y1),
                num(line.x2),
                num(line.y2),
                paint("stroke", line.color),
                num(line.stroke_width)
            )?;
            stats.lines_drawn += 1;
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let transform = if text.rotation_deg != 0.0 {
                format!(
                    r#" transform="rotate({} {} {})""#,
                    num(text.rotation_deg),
                    num(text.x),
                    num(text.y)
                )
            } else {
                String::new()
            };
            writeln!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" {} text-anchor="{anchor}" dominant-baseline="middle"{transform}>{}</text>"#,
                num(text.x),
                num(text.y),
                num(text.font_size_px),
                paint("fill", text.color),
                escape_xml(&text.text)
            )?;
            stats.texts_drawn += 1;
        }

        if let Some(tooltip) = &frame.tooltip {
            let box_width =
                tooltip.text.chars().count() as f64 * TOOLTIP_CHAR_WIDTH_PX + 2.0 * TOOLTIP_PADDING_PX;
            let box_height = TOOLTIP_FONT_PX + 2.0 * TOOLTIP_PADDING_PX;
            writeln!(
                out,
                r##"<g class="tooltip"><rect x="{}" y="{}" width="{}" height="{}" rx="8" fill="#ffffff" stroke="#cccccc"/><text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle">{}</text></g>"##,
                num(tooltip.x),
                num(tooltip.y),
                num(box_width),
                num(box_height),
                num(tooltip.x + box_width / 2.0),
                num(tooltip.y + box_height / 2.0),
                num(TOOLTIP_FONT_PX),
                escape_xml(&tooltip.text)
            )?;
            stats.tooltip_drawn = true;
        }

        out.push_str("</svg>\n");
        Ok((out, stats))
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> DashboardResult<()> {
        frame.validate()?;
        let (document, stats) = self
            .write_frame(frame)
            .map_err(|err| DashboardError::InvalidData(format!("failed to write svg: {err}")))?;
        trace!(bytes = document.len(), ?stats, "svg frame written");
        self.document = document;
        self.last_stats = stats;
        Ok(())
    }
}

fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        rounded.to_string()
    }
}

fn paint(attr: &str, color: Color) -> String {
    let channel = |v: f64| (v * 255.0).round() as u8;
    let mut out = format!(
        r#"{attr}="rgb({},{},{})""#,
        channel(color.red),
        channel(color.green),
        channel(color.blue)
    );
    if color.alpha < 1.0 {
        let _ = write!(out, r#" {attr}-opacity="{}""#, num(color.alpha));
    }
    out
}

fn polar(wedge: &WedgePrimitive, radius: f64, angle: f64) -> (f64, f64) {
    (
        wedge.center_x + radius * angle.sin(),
        wedge.center_y - radius * angle.cos(),
    )
}

fn wedge_path(wedge: &WedgePrimitive) -> String {
    let sweep = (wedge.end_angle - wedge.start_angle).min(TAU);
    let outer = wedge.outer_radius;
    let inner = wedge.inner_radius;

    // A single SVG arc cannot describe a full circle; split it in two.
    if sweep >= TAU - 1e-9 {
        let (tx, ty) = polar(wedge, outer, 0.0);
        let (bx, by) = polar(wedge, outer, TAU / 2.0);
        let mut d = format!(
            "M{},{}A{o},{o} 0 1 1 {},{}A{o},{o} 0 1 1 {},{}Z",
            num(tx),
            num(ty),
            num(bx),
            num(by),
            num(tx),
            num(ty),
            o = num(outer)
        );
        if inner > 0.0 {
            let (itx, ity) = polar(wedge, inner, 0.0);
            let (ibx, iby) = polar(wedge, inner, TAU / 2.0);
            let _ = write!(
                d,
                "M{},{}A{i},{i} 0 1 0 {},{}A{i},{i} 0 1 0 {},{}Z",
                num(itx),
                num(ity),
                num(ibx),
                num(iby),
                num(itx),
                num(ity),
                i = num(inner)
            );
        }
        return d;
    }

    let large = if sweep > TAU / 2.0 { 1 } else { 0 };
    let end_angle = wedge.start_angle + sweep;
    let (sx, sy) = polar(wedge, outer, wedge.start_angle);
    let (ex, ey) = polar(wedge, outer, end_angle);
    let mut d = format!(
        "M{},{}A{o},{o} 0 {large} 1 {},{}",
        num(sx),
        num(sy),
        num(ex),
        num(ey),
        o = num(outer)
    );
    if inner > 0.0 {
        let (iex, iey) = polar(wedge, inner, end_angle);
        let (isx, isy) = polar(wedge, inner, wedge.start_angle);
        let _ = write!(
            d,
            "L{},{}A{i},{i} 0 {large} 0 {},{}Z",
            num(iex),
            num(iey),
            num(isx),
            num(isy),
            i = num(inner)
        );
    } else {
        let _ = write!(d, "L{},{}Z", num(wedge.center_x), num(wedge.center_y));
    }
    d
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
