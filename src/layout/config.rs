use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};
use crate::render::{Color, LineStrokeStyle, PrimitiveRole};

/// Horizontal origin of the stacked OI bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AnchorPolicy {
    /// Every bar grows leftward from the price-axis edge of the plot.
    #[default]
    RightAnchored,
    /// Every bar grows rightward from the left edge of the plot.
    LeftAnchored,
    /// CE rows grow leftward from the axis edge, PE rows grow rightward from
    /// `max_bar_width` inside it.
    AxisSplit,
}

/// Colours and font sizes of the overlay figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlayTheme {
    pub ce_bar: Color,
    pub pe_bar: Color,
    pub ce_change_gain_bar: Color,
    pub ce_change_loss_bar: Color,
    pub pe_change_gain_bar: Color,
    pub pe_change_loss_bar: Color,
    pub ce_label: Color,
    pub pe_label: Color,
    pub change_label: Color,
    pub strike_label: Color,
    pub guide_line: Color,
    pub guide_line_width: f64,
    pub guide_line_style: LineStrokeStyle,
    pub oi_font_size_px: f64,
    pub change_font_size_px: f64,
    pub strike_font_size_px: f64,
}

impl Default for OverlayTheme {
    fn default() -> Self {
        Self {
            ce_bar: Color::from_rgba8(76, 175, 80, 0.8),
            pe_bar: Color::from_rgba8(244, 67, 54, 0.8),
            ce_change_gain_bar: Color::from_rgba8(146, 208, 80, 0.7),
            ce_change_loss_bar: Color::from_rgba8(255, 193, 7, 0.7),
            pe_change_gain_bar: Color::from_rgba8(255, 150, 150, 0.7),
            pe_change_loss_bar: Color::from_rgba8(255, 102, 0, 0.7),
            ce_label: Color::from_rgba8(0x2e, 0x7d, 0x32, 1.0),
            pe_label: Color::from_rgba8(0xb7, 0x1c, 0x1c, 1.0),
            change_label: Color::from_rgba8(0x66, 0x66, 0x66, 1.0),
            strike_label: Color::from_rgba8(0x88, 0x88, 0x88, 1.0),
            guide_line: Color::from_rgba8(120, 120, 120, 0.1),
            guide_line_width: 0.5,
            guide_line_style: LineStrokeStyle::Dashed {
                dash_px: 2.0,
                gap_px: 2.0,
            },
            oi_font_size_px: 9.0,
            change_font_size_px: 8.0,
            strike_font_size_px: 10.0,
        }
    }
}

impl OverlayTheme {
    /// Fill colour of a bar row; change rows switch on the sign of `value`.
    #[must_use]
    pub fn bar_color(&self, role: PrimitiveRole, value: f64) -> Color {
        match role {
            PrimitiveRole::Ce => self.ce_bar,
            PrimitiveRole::Pe => self.pe_bar,
            PrimitiveRole::CeChange if value >= 0.0 => self.ce_change_gain_bar,
            PrimitiveRole::CeChange => self.ce_change_loss_bar,
            PrimitiveRole::PeChange if value >= 0.0 => self.pe_change_gain_bar,
            PrimitiveRole::PeChange => self.pe_change_loss_bar,
            PrimitiveRole::StrikeLabel => self.strike_label,
            PrimitiveRole::GuideLine => self.guide_line,
        }
    }

    #[must_use]
    pub fn label_color(&self, role: PrimitiveRole) -> Color {
        match role {
            PrimitiveRole::Ce => self.ce_label,
            PrimitiveRole::Pe => self.pe_label,
            PrimitiveRole::CeChange | PrimitiveRole::PeChange => self.change_label,
            PrimitiveRole::StrikeLabel => self.strike_label,
            PrimitiveRole::GuideLine => self.guide_line,
        }
    }

    #[must_use]
    pub fn label_font_size(&self, role: PrimitiveRole) -> f64 {
        match role {
            PrimitiveRole::Ce | PrimitiveRole::Pe => self.oi_font_size_px,
            PrimitiveRole::CeChange | PrimitiveRole::PeChange => self.change_font_size_px,
            PrimitiveRole::StrikeLabel | PrimitiveRole::GuideLine => self.strike_font_size_px,
        }
    }

    fn validate(self) -> OverlayResult<Self> {
        for (name, color) in [
            ("ce_bar", self.ce_bar),
            ("pe_bar", self.pe_bar),
            ("ce_change_gain_bar", self.ce_change_gain_bar),
            ("ce_change_loss_bar", self.ce_change_loss_bar),
            ("pe_change_gain_bar", self.pe_change_gain_bar),
            ("pe_change_loss_bar", self.pe_change_loss_bar),
            ("ce_label", self.ce_label),
            ("pe_label", self.pe_label),
            ("change_label", self.change_label),
            ("strike_label", self.strike_label),
            ("guide_line", self.guide_line),
        ] {
            color
                .validate()
                .map_err(|err| OverlayError::InvalidConfig(format!("theme `{name}`: {err}")))?;
        }

        for (name, value) in [
            ("guide_line_width", self.guide_line_width),
            ("oi_font_size_px", self.oi_font_size_px),
            ("change_font_size_px", self.change_font_size_px),
            ("strike_font_size_px", self.strike_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OverlayError::InvalidConfig(format!(
                    "theme `{name}` must be finite and > 0"
                )));
            }
        }

        if let LineStrokeStyle::Dashed { dash_px, gap_px } = self.guide_line_style {
            if !dash_px.is_finite() || !gap_px.is_finite() || dash_px <= 0.0 || gap_px < 0.0 {
                return Err(OverlayError::InvalidConfig(
                    "theme `guide_line_style` dash must be > 0 and gap >= 0".to_owned(),
                ));
            }
        }

        Ok(self)
    }
}

/// Tuning of the OI stack geometry. All lengths are pixels.
///
/// Serializable so hosts can persist overlay setup; missing JSON fields fall
/// back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub bar_height: f64,
    pub bar_gap: f64,
    pub max_bar_width: f64,
    pub change_bar_width_factor: f64,
    pub right_padding: f64,
    pub label_offset: f64,
    pub strike_label_offset: f64,
    pub anchor: AnchorPolicy,
    pub theme: OverlayTheme,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            bar_height: 6.0,
            bar_gap: 2.0,
            max_bar_width: 80.0,
            change_bar_width_factor: 0.6,
            right_padding: 5.0,
            label_offset: 5.0,
            strike_label_offset: 8.0,
            anchor: AnchorPolicy::RightAnchored,
            theme: OverlayTheme::default(),
        }
    }
}

impl LayoutConfig {
    pub fn from_json_str(input: &str) -> OverlayResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            OverlayError::InvalidConfig(format!("failed to parse layout config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> OverlayResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            OverlayError::InvalidConfig(format!("failed to serialize layout config: {e}"))
        })
    }

    #[must_use]
    pub fn with_bar_height(mut self, bar_height: f64) -> Self {
        self.bar_height = bar_height;
        self
    }

    #[must_use]
    pub fn with_bar_gap(mut self, bar_gap: f64) -> Self {
        self.bar_gap = bar_gap;
        self
    }

    #[must_use]
    pub fn with_max_bar_width(mut self, max_bar_width: f64) -> Self {
        self.max_bar_width = max_bar_width;
        self
    }

    #[must_use]
    pub fn with_change_bar_width_factor(mut self, factor: f64) -> Self {
        self.change_bar_width_factor = factor;
        self
    }

    #[must_use]
    pub fn with_right_padding(mut self, right_padding: f64) -> Self {
        self.right_padding = right_padding;
        self
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: AnchorPolicy) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: OverlayTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Height of the four-row stack: `4 * bar_height + 3 * bar_gap`.
    #[must_use]
    pub fn stack_height(&self) -> f64 {
        4.0 * self.bar_height + 3.0 * self.bar_gap
    }

    /// Full-scale width of a bar row.
    #[must_use]
    pub fn row_width_limit(&self, role: PrimitiveRole) -> f64 {
        if role.is_change() {
            self.max_bar_width * self.change_bar_width_factor
        } else {
            self.max_bar_width
        }
    }

    pub fn validate(self) -> OverlayResult<Self> {
        for (value, name) in [
            (self.bar_height, "bar_height"),
            (self.max_bar_width, "max_bar_width"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OverlayError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }

        for (value, name) in [
            (self.bar_gap, "bar_gap"),
            (self.right_padding, "right_padding"),
            (self.label_offset, "label_offset"),
            (self.strike_label_offset, "strike_label_offset"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(OverlayError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }

        if !self.change_bar_width_factor.is_finite()
            || !(0.0..=1.0).contains(&self.change_bar_width_factor)
        {
            return Err(OverlayError::InvalidConfig(
                "`change_bar_width_factor` must be in [0, 1]".to_owned(),
            ));
        }

        if !self.stack_height().is_finite() {
            return Err(OverlayError::InvalidConfig(
                "bar stack height `4 * bar_height + 3 * bar_gap` must be finite".to_owned(),
            ));
        }

        self.theme.validate()?;
        Ok(self)
    }
}
