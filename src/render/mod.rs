mod frame;
mod null_renderer;
mod palette;
mod primitives;
mod svg_backend;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use palette::Palette;
pub use primitives::{
    ClipRect, Color, LinePrimitive, PolylinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
    TooltipPrimitive, WedgePrimitive,
};
pub use svg_backend::{SvgRenderStats, SvgRenderer};

use crate::error::DashboardResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from data shaping and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> DashboardResult<()>;
}
