//! Player objects.

use serde::{Deserialize, Serialize};

use crate::core::{Entity, EntityId};
use crate::error::{GameError, Result};

/// A player who can be registered in a store and joined to games.
///
/// Immutable after construction apart from [`Player::set_name`], which
/// re-validates on write.
///
/// ## Example
///
/// ```
/// use card_czar::objects::Player;
///
/// let player = Player::new("Alex").unwrap();
/// assert_eq!(player.name(), "Alex");
///
/// assert!(Player::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: EntityId,
    name: String,
}

impl Player {
    /// Create a player with a non-empty name.
    ///
    /// Fails with `ValidationFailure` for an empty name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let mut player = Self {
            id: EntityId::new(),
            name: String::new(),
        };
        player.set_name(name)?;
        Ok(player)
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the player. The new name must be non-empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(GameError::ValidationFailure {
                object: "Player",
                field: "name",
            });
        }
        self.name = name;
        Ok(())
    }
}

impl Entity for Player {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let player = Player::new("test player 1").unwrap();
        assert_eq!(player.name(), "test player 1");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Player::new("").unwrap_err();
        assert_eq!(
            err,
            GameError::ValidationFailure {
                object: "Player",
                field: "name",
            }
        );
    }

    #[test]
    fn test_rename_revalidates() {
        let mut player = Player::new("before").unwrap();
        assert!(player.set_name("").is_err());
        assert_eq!(player.name(), "before");

        player.set_name("after").unwrap();
        assert_eq!(player.name(), "after");
    }

    #[test]
    fn test_id_survives_rename() {
        let mut player = Player::new("before").unwrap();
        let id = player.id();
        player.set_name("after").unwrap();
        assert_eq!(player.id(), id);
    }

    #[test]
    fn test_serialization() {
        let player = Player::new("test player 1").unwrap();
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
