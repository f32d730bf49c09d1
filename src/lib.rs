//! oi-overlay: open-interest strike overlay for candlestick charts.
//!
//! The crate lays out call/put open interest and its period change as stacked
//! bars, value labels and dashed guide lines at each strike price. The host
//! chart supplies the price-to-pixel mapping and the viewport bounds; the
//! overlay answers with an ordered list of drawable primitives.

pub mod core;
pub mod error;
pub mod extensions;
pub mod layout;
pub mod render;
pub mod synthetic;
pub mod telemetry;

pub use crate::core::{Bounding, CoordinateMapper, PriceAxis, StrikeRecord};
pub use error::{OverlayError, OverlayResult};
pub use extensions::{FigureRegistry, OiOverlay};
pub use layout::{LayoutConfig, compute_overlay_primitives};
