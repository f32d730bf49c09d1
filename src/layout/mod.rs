//! OI overlay layout engine.
//!
//! Pure computation: strike records, viewport bounds and a price mapper in,
//! an ordered primitive list out. Nothing is cached between passes.

mod config;
mod engine;
pub mod label;

pub use config::{AnchorPolicy, LayoutConfig, OverlayTheme};
pub use engine::{
    MAX_PRIMITIVES_PER_STRIKE, compute_overlay_primitives, global_max,
    try_compute_overlay_primitives,
};
