//! Entity identification system.
//!
//! Every domain object (player, card, card pack, game) carries a unique
//! `EntityId` assigned once at construction. IDs are opaque UUIDv4 tokens:
//! they are never reused and carry no ordering or kind information.
//!
//! Kind information is explicit instead: every registrable object maps to
//! one of the closed [`Kind`] tags, which the store uses for its per-kind
//! indices and which reference checks compare against.
//!
//! ## Usage
//!
//! ```
//! use card_czar::core::{EntityId, Kind};
//!
//! let a = EntityId::new();
//! let b = EntityId::new();
//! assert_ne!(a, b);
//!
//! assert_eq!(Kind::ALL.len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for any domain entity.
///
/// Assigned at construction and immutable for the lifetime of the object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Create a fresh, globally unique identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the raw UUID value.
    #[must_use]
    pub const fn raw(self) -> Uuid {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of kinds an object in the store can have.
///
/// Replaces runtime type inspection: every storable object carries its tag
/// explicitly via `GameObject::kind()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// A player who can join games.
    Player,
    /// A single card.
    Card,
    /// A pack (expansion) of cards.
    CardPack,
}

impl Kind {
    /// All registrable kinds, in index order.
    pub const ALL: [Kind; 3] = [Kind::Player, Kind::Card, Kind::CardPack];
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Player => write!(f, "Player"),
            Kind::Card => write!(f, "Card"),
            Kind::CardPack => write!(f, "CardPack"),
        }
    }
}

/// Common surface of every identified domain object.
pub trait Entity {
    /// The unique identifier assigned at construction.
    fn id(&self) -> EntityId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids: Vec<_> = (0..100).map(|_| EntityId::new()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_id_is_stable() {
        let id = EntityId::new();
        let copy = id;
        assert_eq!(id, copy);
        assert_eq!(id.raw(), copy.raw());
    }

    #[test]
    fn test_display_matches_uuid() {
        let id = EntityId::new();
        assert_eq!(format!("{}", id), id.raw().to_string());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Player.to_string(), "Player");
        assert_eq!(Kind::Card.to_string(), "Card");
        assert_eq!(Kind::CardPack.to_string(), "CardPack");
    }

    #[test]
    fn test_serialization() {
        let id = EntityId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);

        let kind_json = serde_json::to_string(&Kind::CardPack).unwrap();
        let kind: Kind = serde_json::from_str(&kind_json).unwrap();
        assert_eq!(kind, Kind::CardPack);
    }
}
