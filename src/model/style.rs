//! Document-wide style defaults.

use serde::{Deserialize, Serialize};
use unicode_bidi::BidiInfo;

/// Default font family of the base paragraph style.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Default font size of the base paragraph style, in points.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Font and direction defaults applied to the base ("Normal") style.
///
/// A document receives its defaults once, at construction, and keeps them
/// for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDefaults {
    /// Font family
    pub font_family: String,

    /// Font size in points
    pub font_size: f32,

    /// Base text direction of paragraphs
    pub direction: TextDirection,
}

impl StyleDefaults {
    /// Create style defaults with Arial 12pt and automatic direction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn with_font(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, points: f32) -> Self {
        self.font_size = points.max(1.0);
        self
    }

    /// Set the text direction.
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Font size in half-points, the unit WordprocessingML uses for `w:sz`.
    pub fn half_points(&self) -> u32 {
        (self.font_size * 2.0).round() as u32
    }
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            direction: TextDirection::Auto,
        }
    }
}

/// Base direction of paragraph text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    /// Resolve per paragraph from its first strong character
    #[default]
    Auto,
    /// Force left-to-right
    LeftToRight,
    /// Force right-to-left
    RightToLeft,
}

impl TextDirection {
    /// Check whether `text` should be laid out right-to-left.
    pub fn is_rtl(&self, text: &str) -> bool {
        match self {
            TextDirection::LeftToRight => false,
            TextDirection::RightToLeft => true,
            TextDirection::Auto => detect_rtl(text),
        }
    }
}

/// Resolve the base direction of `text` with the Unicode bidi algorithm.
///
/// Text without any strong character (rules, digits, punctuation) is
/// treated as left-to-right.
fn detect_rtl(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let info = BidiInfo::new(text, None);
    info.paragraphs
        .first()
        .map(|para| para.level.is_rtl())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = StyleDefaults::default();
        assert_eq!(defaults.font_family, "Arial");
        assert_eq!(defaults.font_size, 12.0);
        assert_eq!(defaults.half_points(), 24);
        assert_eq!(defaults.direction, TextDirection::Auto);
    }

    #[test]
    fn test_builder() {
        let defaults = StyleDefaults::new()
            .with_font("Tahoma")
            .with_font_size(10.5)
            .with_direction(TextDirection::RightToLeft);
        assert_eq!(defaults.font_family, "Tahoma");
        assert_eq!(defaults.half_points(), 21);
        assert_eq!(defaults.direction, TextDirection::RightToLeft);
    }

    #[test]
    fn test_auto_direction() {
        let auto = TextDirection::Auto;
        assert!(auto.is_rtl("📖 الواجب الروحي الأسبوعي"));
        assert!(auto.is_rtl("1. احترام الكبار:"));
        assert!(!auto.is_rtl("Weekly homework"));
        assert!(!auto.is_rtl("__________"));
        assert!(!auto.is_rtl(""));
    }

    #[test]
    fn test_forced_direction() {
        assert!(TextDirection::RightToLeft.is_rtl("abc"));
        assert!(!TextDirection::LeftToRight.is_rtl("سلام"));
    }
}
