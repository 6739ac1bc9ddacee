//! Domain objects: players, cards, and card packs.
//!
//! ## Key Types
//!
//! - `Player`: a named participant
//! - `Card` / `CardConfig`: a validated card with styling defaults
//! - `CardPack` / `CardPackConfig`: a non-empty pack supporting random
//!   sampling
//! - `GameObject`: the closed tagged union the store registers
//!
//! Construction validates required fields and applies documented defaults;
//! once built, the core trusts these invariants and never re-checks them.

pub mod card;
pub mod pack;
pub mod player;

pub use card::{Card, CardConfig, DEFAULT_BG_COLOR, DEFAULT_FG_COLOR, DEFAULT_FONT};
pub use pack::{CardPack, CardPackConfig};
pub use player::Player;

use serde::{Deserialize, Serialize};

use crate::core::{Entity, EntityId, Kind};

/// The closed union of everything the store can register.
///
/// Each variant maps to exactly one [`Kind`] tag; there is no "unknown"
/// case because the enum is the whole universe of storable objects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameObject {
    /// A player.
    Player(Player),
    /// A single card.
    Card(Card),
    /// A pack of cards.
    CardPack(CardPack),
}

impl GameObject {
    /// The kind tag for this object.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            GameObject::Player(_) => Kind::Player,
            GameObject::Card(_) => Kind::Card,
            GameObject::CardPack(_) => Kind::CardPack,
        }
    }

    /// Borrow the inner player, if this is one.
    #[must_use]
    pub fn as_player(&self) -> Option<&Player> {
        match self {
            GameObject::Player(player) => Some(player),
            _ => None,
        }
    }

    /// Borrow the inner card, if this is one.
    #[must_use]
    pub fn as_card(&self) -> Option<&Card> {
        match self {
            GameObject::Card(card) => Some(card),
            _ => None,
        }
    }

    /// Borrow the inner card pack, if this is one.
    #[must_use]
    pub fn as_card_pack(&self) -> Option<&CardPack> {
        match self {
            GameObject::CardPack(pack) => Some(pack),
            _ => None,
        }
    }
}

impl Entity for GameObject {
    fn id(&self) -> EntityId {
        match self {
            GameObject::Player(player) => player.id(),
            GameObject::Card(card) => card.id(),
            GameObject::CardPack(pack) => pack.id(),
        }
    }
}

impl From<Player> for GameObject {
    fn from(player: Player) -> Self {
        GameObject::Player(player)
    }
}

impl From<Card> for GameObject {
    fn from(card: Card) -> Self {
        GameObject::Card(card)
    }
}

impl From<CardPack> for GameObject {
    fn from(pack: CardPack) -> Self {
        GameObject::CardPack(pack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        let player: GameObject = Player::new("p").unwrap().into();
        let card: GameObject = Card::new(CardConfig::new("c")).unwrap().into();
        let pack: GameObject = CardPack::new(CardPackConfig::new(
            "pack",
            vec![Card::new(CardConfig::new("c")).unwrap()],
        ))
        .unwrap()
        .into();

        assert_eq!(player.kind(), Kind::Player);
        assert_eq!(card.kind(), Kind::Card);
        assert_eq!(pack.kind(), Kind::CardPack);
    }

    #[test]
    fn test_id_passthrough() {
        let player = Player::new("p").unwrap();
        let id = player.id();
        let obj: GameObject = player.into();
        assert_eq!(obj.id(), id);
    }

    #[test]
    fn test_variant_accessors() {
        let obj: GameObject = Player::new("p").unwrap().into();
        assert!(obj.as_player().is_some());
        assert!(obj.as_card().is_none());
        assert!(obj.as_card_pack().is_none());
    }
}
