//! Card objects and their styling defaults.
//!
//! Cards are validated value objects: required text, defaulted styling.
//! Blanks in card text are marked with a single underscore (`_`); the core
//! stores the text verbatim and leaves blank handling to renderers.

use serde::{Deserialize, Serialize};

use crate::core::{Entity, EntityId};
use crate::error::{GameError, Result};

/// Font used when a card or pack does not specify one.
pub const DEFAULT_FONT: &str = "Helvetica";
/// Background color used when a card or pack does not specify one.
pub const DEFAULT_BG_COLOR: &str = "#FFFFFF";
/// Foreground (text) color used when a card or pack does not specify one.
pub const DEFAULT_FG_COLOR: &str = "#000000";

/// Resolve an optional styling field to its value or a default.
///
/// Empty strings count as absent, matching the defaulting contract for
/// "absent or falsy" inputs.
pub(crate) fn style_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

/// Construction input for a [`Card`].
///
/// Only `text` is required; styling fields fall back to the pack-wide
/// defaults above when `None` or empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    /// The card's text. Blanks are a single underscore.
    pub text: String,
    /// Display font.
    pub font: Option<String>,
    /// Background color.
    pub bg_color: Option<String>,
    /// Foreground (text) color.
    pub fg_color: Option<String>,
    /// Expansion code shown on the card.
    pub expansion_code: Option<String>,
}

impl CardConfig {
    /// Create a config with only the required text set.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the display font.
    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn with_bg_color(mut self, color: impl Into<String>) -> Self {
        self.bg_color = Some(color.into());
        self
    }

    /// Set the foreground color.
    #[must_use]
    pub fn with_fg_color(mut self, color: impl Into<String>) -> Self {
        self.fg_color = Some(color.into());
        self
    }

    /// Set the expansion code.
    #[must_use]
    pub fn with_expansion_code(mut self, code: impl Into<String>) -> Self {
        self.expansion_code = Some(code.into());
        self
    }
}

/// A single card.
///
/// ## Example
///
/// ```
/// use card_czar::objects::{Card, CardConfig};
///
/// let card = Card::new(CardConfig::new("Hello _")).unwrap();
/// assert_eq!(card.text(), "Hello _");
/// assert_eq!(card.font(), "Helvetica");
/// assert_eq!(card.bg_color(), "#FFFFFF");
/// assert_eq!(card.fg_color(), "#000000");
/// assert_eq!(card.expansion_code(), "");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: EntityId,
    text: String,
    font: String,
    bg_color: String,
    fg_color: String,
    expansion_code: String,
}

impl Card {
    /// Build a card from a config, applying the documented defaults.
    ///
    /// Fails with `ValidationFailure` when `text` is empty.
    pub fn new(config: CardConfig) -> Result<Self> {
        if config.text.is_empty() {
            return Err(GameError::ValidationFailure {
                object: "Card",
                field: "text",
            });
        }

        Ok(Self {
            id: EntityId::new(),
            text: config.text,
            font: style_or(config.font, DEFAULT_FONT),
            bg_color: style_or(config.bg_color, DEFAULT_BG_COLOR),
            fg_color: style_or(config.fg_color, DEFAULT_FG_COLOR),
            expansion_code: style_or(config.expansion_code, ""),
        })
    }

    /// The card's text, blanks marked with a single underscore.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The font this card is displayed with.
    #[must_use]
    pub fn font(&self) -> &str {
        &self.font
    }

    /// The card's background color.
    #[must_use]
    pub fn bg_color(&self) -> &str {
        &self.bg_color
    }

    /// The card's foreground (text) color.
    #[must_use]
    pub fn fg_color(&self) -> &str {
        &self.fg_color
    }

    /// The expansion code shown on the card, or `""`.
    #[must_use]
    pub fn expansion_code(&self) -> &str {
        &self.expansion_code
    }
}

impl Entity for Card {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_absent() {
        let card = Card::new(CardConfig::new("test card 1")).unwrap();

        assert_eq!(card.text(), "test card 1");
        assert_eq!(card.font(), DEFAULT_FONT);
        assert_eq!(card.bg_color(), DEFAULT_BG_COLOR);
        assert_eq!(card.fg_color(), DEFAULT_FG_COLOR);
        assert_eq!(card.expansion_code(), "");
    }

    #[test]
    fn test_defaults_applied_when_empty() {
        let config = CardConfig::new("text")
            .with_font("")
            .with_bg_color("")
            .with_fg_color("")
            .with_expansion_code("");
        let card = Card::new(config).unwrap();

        assert_eq!(card.font(), DEFAULT_FONT);
        assert_eq!(card.bg_color(), DEFAULT_BG_COLOR);
        assert_eq!(card.fg_color(), DEFAULT_FG_COLOR);
        assert_eq!(card.expansion_code(), "");
    }

    #[test]
    fn test_explicit_styling_kept() {
        let config = CardConfig::new("text")
            .with_font("Courier")
            .with_bg_color("#000000")
            .with_fg_color("#FFFFFF")
            .with_expansion_code("X1");
        let card = Card::new(config).unwrap();

        assert_eq!(card.font(), "Courier");
        assert_eq!(card.bg_color(), "#000000");
        assert_eq!(card.fg_color(), "#FFFFFF");
        assert_eq!(card.expansion_code(), "X1");
    }

    #[test]
    fn test_empty_text_rejected() {
        let err = Card::new(CardConfig::new("")).unwrap_err();
        assert_eq!(
            err,
            GameError::ValidationFailure {
                object: "Card",
                field: "text",
            }
        );
    }

    #[test]
    fn test_each_card_gets_own_id() {
        let a = Card::new(CardConfig::new("same text")).unwrap();
        let b = Card::new(CardConfig::new("same text")).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardConfig::new("test card 1")).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
