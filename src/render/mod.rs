mod frame;
mod null_renderer;
mod overlay_primitive;
mod primitives;

pub use frame::OverlayFrame;
pub use null_renderer::NullRenderer;
pub use overlay_primitive::{
    BAR_FIGURE, OverlayPrimitive, OverlayShape, PrimitiveRole, STRIKE_LINE_FIGURE, TEXT_FIGURE,
};
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::OverlayResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `OverlayFrame` so
/// drawing code stays isolated from layout arithmetic.
pub trait Renderer {
    fn render(&mut self, frame: &OverlayFrame) -> OverlayResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
