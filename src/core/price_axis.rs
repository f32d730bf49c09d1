use serde::{Deserialize, Serialize};

use crate::core::CoordinateMapper;
use crate::error::{OverlayError, OverlayResult};

/// Linear visible price range mapped onto an inverted pixel Y span.
///
/// `max` lands on `top_px` and `min` on `bottom_px`. Prices outside
/// `[min, max]` are not visible and map to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceAxis {
    min: f64,
    max: f64,
    top_px: f64,
    bottom_px: f64,
}

impl PriceAxis {
    pub fn new(min: f64, max: f64, top_px: f64, bottom_px: f64) -> OverlayResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(OverlayError::InvalidData(
                "price axis range must be finite with min < max".to_owned(),
            ));
        }
        if !top_px.is_finite() || !bottom_px.is_finite() || bottom_px <= top_px {
            return Err(OverlayError::InvalidData(
                "price axis pixel span must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            min,
            max,
            top_px,
            bottom_px,
        })
    }

    #[must_use]
    pub fn contains(self, price: f64) -> bool {
        price.is_finite() && (self.min..=self.max).contains(&price)
    }

    /// Maps a visible price to pixel Y.
    #[must_use]
    pub fn price_to_pixel(self, price: f64) -> Option<f64> {
        if !self.contains(price) {
            return None;
        }
        let normalized = (price - self.min) / (self.max - self.min);
        Some(self.bottom_px - normalized * (self.bottom_px - self.top_px))
    }

    pub fn pixel_to_price(self, pixel: f64) -> OverlayResult<f64> {
        if !pixel.is_finite() {
            return Err(OverlayError::InvalidData("pixel must be finite".to_owned()));
        }
        let normalized = (self.bottom_px - pixel) / (self.bottom_px - self.top_px);
        Ok(self.min + normalized * (self.max - self.min))
    }
}

impl CoordinateMapper for PriceAxis {
    fn price_to_pixel_y(&self, price: f64) -> Option<f64> {
        self.price_to_pixel(price)
    }
}
