use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

/// Pixel rectangle of the visible chart viewport, refreshed by the host on
/// every draw call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub width: f64,
}

impl Bounding {
    #[must_use]
    pub fn new(left: f64, right: f64, top: f64, bottom: f64, width: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            width,
        }
    }

    /// Builds bounds from edges, deriving `width` as `right - left`.
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, right, top, bottom, right - left)
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.left, self.right, self.top, self.bottom, self.width]
            .iter()
            .all(|value| value.is_finite())
            && self.width > 0.0
    }

    pub fn validate(self) -> OverlayResult<Self> {
        if !self.is_valid() {
            return Err(OverlayError::InvalidBounds { width: self.width });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Bounding;

    #[test]
    fn from_edges_derives_width() {
        let bounds = Bounding::from_edges(10.0, 0.0, 510.0, 400.0);
        assert_eq!(bounds.width, 500.0);
        assert_eq!(bounds.height(), 400.0);
        assert!(bounds.is_valid());
    }

    #[test]
    fn zero_or_non_finite_width_is_invalid() {
        assert!(!Bounding::from_edges(0.0, 0.0, 0.0, 100.0).is_valid());
        assert!(!Bounding::new(0.0, 10.0, 0.0, 10.0, -1.0).is_valid());
        assert!(!Bounding::new(f64::NAN, 10.0, 0.0, 10.0, 10.0).is_valid());
        assert!(Bounding::new(0.0, 10.0, 0.0, 10.0, -1.0).validate().is_err());
    }
}
