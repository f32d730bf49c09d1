use crate::core::Bounding;
use crate::error::{OverlayError, OverlayResult};
use crate::render::{OverlayPrimitive, OverlayShape, PrimitiveRole};

/// Backend-agnostic overlay scene for one chart draw pass.
///
/// Draw order is list order.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    pub bounds: Bounding,
    pub primitives: Vec<OverlayPrimitive>,
}

impl OverlayFrame {
    #[must_use]
    pub fn from_primitives(bounds: Bounding, primitives: Vec<OverlayPrimitive>) -> Self {
        Self { bounds, primitives }
    }

    pub fn validate(&self) -> OverlayResult<()> {
        if !self.bounds.is_valid() {
            return Err(OverlayError::InvalidBounds {
                width: self.bounds.width,
            });
        }
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.count_where(|shape| matches!(shape, OverlayShape::Rect(_)))
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.count_where(|shape| matches!(shape, OverlayShape::Text(_)))
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.count_where(|shape| matches!(shape, OverlayShape::Line(_)))
    }

    pub fn primitives_for_role(
        &self,
        role: PrimitiveRole,
    ) -> impl Iterator<Item = &OverlayPrimitive> + '_ {
        self.primitives
            .iter()
            .filter(move |primitive| primitive.role == role)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    fn count_where(&self, predicate: impl Fn(&OverlayShape) -> bool) -> usize {
        self.primitives
            .iter()
            .filter(|primitive| predicate(&primitive.shape))
            .count()
    }
}
