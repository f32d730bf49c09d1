use serde::{Deserialize, Serialize};

use crate::error::OverlayResult;
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Semantic tag carried by every overlay primitive so hosts can style or
/// hit-test independently of draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimitiveRole {
    Ce,
    Pe,
    CeChange,
    PeChange,
    StrikeLabel,
    GuideLine,
}

impl PrimitiveRole {
    /// The four stacked bar rows, top to bottom.
    pub const BAR_ROWS: [Self; 4] = [Self::Ce, Self::Pe, Self::CeChange, Self::PeChange];

    #[must_use]
    pub fn is_change(self) -> bool {
        matches!(self, Self::CeChange | Self::PeChange)
    }
}

/// Geometry of one overlay primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OverlayShape {
    Rect(RectPrimitive),
    Text(TextPrimitive),
    Line(LinePrimitive),
}

impl OverlayShape {
    /// Name of the host figure kind that draws this shape.
    #[must_use]
    pub fn figure_name(&self) -> &'static str {
        match self {
            Self::Rect(_) => BAR_FIGURE,
            Self::Text(_) => TEXT_FIGURE,
            Self::Line(_) => STRIKE_LINE_FIGURE,
        }
    }

    pub fn validate(&self) -> OverlayResult<()> {
        match self {
            Self::Rect(rect) => rect.validate(),
            Self::Text(text) => text.validate(),
            Self::Line(line) => line.validate(),
        }
    }
}

pub const BAR_FIGURE: &str = "oiBar";
pub const TEXT_FIGURE: &str = "oiText";
pub const STRIKE_LINE_FIGURE: &str = "strikeLine";

/// One drawable emitted by the layout engine for a strike row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayPrimitive {
    pub strike_price: f64,
    pub role: PrimitiveRole,
    pub shape: OverlayShape,
}

impl OverlayPrimitive {
    #[must_use]
    pub fn rect(strike_price: f64, role: PrimitiveRole, rect: RectPrimitive) -> Self {
        Self {
            strike_price,
            role,
            shape: OverlayShape::Rect(rect),
        }
    }

    #[must_use]
    pub fn text(strike_price: f64, role: PrimitiveRole, text: TextPrimitive) -> Self {
        Self {
            strike_price,
            role,
            shape: OverlayShape::Text(text),
        }
    }

    #[must_use]
    pub fn line(strike_price: f64, role: PrimitiveRole, line: LinePrimitive) -> Self {
        Self {
            strike_price,
            role,
            shape: OverlayShape::Line(line),
        }
    }

    #[must_use]
    pub fn figure_name(&self) -> &'static str {
        self.shape.figure_name()
    }

    #[must_use]
    pub fn as_rect(&self) -> Option<&RectPrimitive> {
        match &self.shape {
            OverlayShape::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&TextPrimitive> {
        match &self.shape {
            OverlayShape::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_line(&self) -> Option<&LinePrimitive> {
        match &self.shape {
            OverlayShape::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn validate(&self) -> OverlayResult<()> {
        self.shape.validate()
    }
}
