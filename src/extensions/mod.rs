//! Host integration: figure-kind registration and the overlay draw callback.

mod figures;
mod overlay;

pub use figures::{
    DrawFigureFn, DrawSurface, FigureKind, FigureRegistry, HitTestFn, register_overlay_figures,
};
pub use overlay::OiOverlay;
