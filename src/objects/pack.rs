//! Card packs (expansions).

use serde::{Deserialize, Serialize};

use super::card::{style_or, Card, DEFAULT_BG_COLOR, DEFAULT_FG_COLOR, DEFAULT_FONT};
use crate::core::{Entity, EntityId, GameRng};
use crate::error::{GameError, Result};

/// Construction input for a [`CardPack`].
///
/// `name` and `cards` are required; styling fields carry the same
/// defaulting rules as [`super::CardConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPackConfig {
    /// The pack's name.
    pub name: String,
    /// Default display font for cards in this pack.
    pub font: Option<String>,
    /// Default background color.
    pub bg_color: Option<String>,
    /// Default foreground color.
    pub fg_color: Option<String>,
    /// Expansion code shown for this pack.
    pub expansion_code: Option<String>,
    /// The cards in this pack. Must be non-empty.
    pub cards: Vec<Card>,
}

impl CardPackConfig {
    /// Create a config with the required fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            cards,
            ..Self::default()
        }
    }

    /// Set the default font.
    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Set the default background color.
    #[must_use]
    pub fn with_bg_color(mut self, color: impl Into<String>) -> Self {
        self.bg_color = Some(color.into());
        self
    }

    /// Set the default foreground color.
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

/// A pack of cards, also known as an expansion.
///
/// Invariant: a pack always holds at least one card.
///
/// ## Example
///
/// ```
/// use card_czar::core::GameRng;
/// use card_czar::objects::{Card, CardConfig, CardPack, CardPackConfig};
///
/// let cards = vec![Card::new(CardConfig::new("test card 1")).unwrap()];
/// let pack = CardPack::new(CardPackConfig::new("test pack 1", cards)).unwrap();
///
/// let mut rng = GameRng::new(42);
/// assert_eq!(pack.sample(&mut rng, 1).len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPack {
    id: EntityId,
    name: String,
    font: String,
    bg_color: String,
    fg_color: String,
    expansion_code: String,
    cards: Vec<Card>,
}

impl CardPack {
    /// Build a pack from a config, applying the documented defaults.
    ///
    /// Fails with `ValidationFailure` when `name` is empty or `cards` is
    /// empty.
    pub fn new(config: CardPackConfig) -> Result<Self> {
        if config.name.is_empty() {
            return Err(GameError::ValidationFailure {
                object: "CardPack",
                field: "name",
            });
        }
        if config.cards.is_empty() {
            return Err(GameError::ValidationFailure {
                object: "CardPack",
                field: "cards",
            });
        }

        Ok(Self {
            id: EntityId::new(),
            name: config.name,
            font: style_or(config.font, DEFAULT_FONT),
            bg_color: style_or(config.bg_color, DEFAULT_BG_COLOR),
            fg_color: style_or(config.fg_color, DEFAULT_FG_COLOR),
            expansion_code: style_or(config.expansion_code, ""),
            cards: config.cards,
        })
    }

    /// The pack's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default font for cards in this pack.
    #[must_use]
    pub fn font(&self) -> &str {
        &self.font
    }

    /// The default background color for cards in this pack.
    #[must_use]
    pub fn bg_color(&self) -> &str {
        &self.bg_color
    }

    /// The default foreground color for cards in this pack.
    #[must_use]
    pub fn fg_color(&self) -> &str {
        &self.fg_color
    }

    /// The expansion code shown for this pack, or `""`.
    #[must_use]
    pub fn expansion_code(&self) -> &str {
        &self.expansion_code
    }

    /// The cards in this pack, in their original order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in this pack. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false`; kept for slice-like API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw up to `amount` distinct cards uniformly at random.
    ///
    /// Returns fewer cards when the pack holds fewer than `amount`.
    #[must_use]
    pub fn sample(&self, rng: &mut GameRng, amount: usize) -> Vec<Card> {
        rng.sample(&self.cards, amount).into_iter().cloned().collect()
    }
}

impl Entity for CardPack {
    fn id(&self) -> EntityId {
        self.id
    }
}
