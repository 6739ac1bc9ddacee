//! Crate error type.
//!
//! [`GameError`] is the single error enum for the whole core. Every variant
//! carries the originating entity's id (when one exists) as structured
//! context, and maps to a stable message key via [`GameError::code`].
//!
//! The `Display` strings are defaults for logs and tests; user-facing text
//! is a caller concern, produced by mapping `code()` through whatever
//! message catalog the embedding layer uses.

use crate::core::{EntityId, Kind};
use crate::game::{GameAction, GameState};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

/// Every failure the session core can report.
///
/// Validation and precondition failures surface immediately at the call
/// that violates them; nothing is retried or recovered internally. The two
/// documented idempotent no-ops (removing an absent store object, re-adding
/// a present roster member) are not errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A required field was empty at construction or on write.
    #[error("{object} requires a non-empty {field}")]
    ValidationFailure {
        /// Which object type was being constructed or mutated.
        object: &'static str,
        /// The offending field.
        field: &'static str,
    },

    /// An object with this id is already registered in the store.
    #[error("object {id} is already registered in the store")]
    DuplicateIdentifier {
        /// The already-registered id.
        id: EntityId,
    },

    /// The object's kind is not one the store was created with.
    #[error("object {id} has kind {kind}, which this store does not know")]
    UnknownKind {
        /// The rejected object's id.
        id: EntityId,
        /// Its kind tag.
        kind: Kind,
    },

    /// A referenced id did not resolve to any object in the store.
    #[error("game {game}: no object in the store for id {id}")]
    ReferencedObjectMissing {
        /// The game performing the lookup.
        game: EntityId,
        /// The unresolved id.
        id: EntityId,
    },

    /// A referenced id resolved to an object of the wrong kind.
    #[error("game {game}: object {id} is a {actual}, expected a {expected}")]
    WrongObjectKind {
        /// The game performing the lookup.
        game: EntityId,
        /// The resolved id.
        id: EntityId,
        /// The kind the operation required.
        expected: Kind,
        /// The kind actually found.
        actual: Kind,
    },

    /// The game's current state does not permit the attempted action.
    #[error("game {game}: {action} is not permitted in state {state}")]
    InvalidGameState {
        /// The gated game.
        game: EntityId,
        /// The attempted action.
        action: GameAction,
        /// The state the game was in.
        state: GameState,
    },

    /// A state change that does not strictly advance the lifecycle.
    #[error("game {game}: cannot change state from {from} to {to}")]
    IllegalStateChange {
        /// The gated game.
        game: EntityId,
        /// The state the game was in.
        from: GameState,
        /// The rejected target state.
        to: GameState,
    },

    /// Too few players joined to start the game.
    #[error("game {game}: {have} players joined, at least {need} required")]
    NotEnoughPlayers {
        /// The game that failed to start.
        game: EntityId,
        /// Current roster size.
        have: usize,
        /// Minimum roster size.
        need: usize,
    },
}

impl GameError {
    /// Stable machine-checkable message key for this error.
    ///
    /// Keys are dotted paths suitable for lookup in a localization catalog.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GameError::ValidationFailure { .. } => "general.empty-field",
            GameError::DuplicateIdentifier { .. } => "store.duplicate-object",
            GameError::UnknownKind { .. } => "store.unknown-kind",
            GameError::ReferencedObjectMissing { .. } => "game.no-object",
            GameError::WrongObjectKind { .. } => "game.wrong-kind",
            GameError::InvalidGameState { .. } => "game.invalid-action-state",
            GameError::IllegalStateChange { .. } => "game.invalid-state-change",
            GameError::NotEnoughPlayers { .. } => "game.not-enough-players",
        }
    }

    /// The id of the entity the error originated from, when one exists.
    #[must_use]
    pub fn entity(&self) -> Option<EntityId> {
        match *self {
            GameError::ValidationFailure { .. } => None,
            GameError::DuplicateIdentifier { id } | GameError::UnknownKind { id, .. } => Some(id),
            GameError::ReferencedObjectMissing { game, .. }
            | GameError::WrongObjectKind { game, .. }
            | GameError::InvalidGameState { game, .. }
            | GameError::IllegalStateChange { game, .. }
            | GameError::NotEnoughPlayers { game, .. } => Some(game),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_context() {
        let id = EntityId::new();
        let err = GameError::DuplicateIdentifier { id };
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn test_codes_are_stable() {
        let game = EntityId::new();
        let err = GameError::IllegalStateChange {
            game,
            from: GameState::InGame,
            to: GameState::Starting,
        };
        assert_eq!(err.code(), "game.invalid-state-change");
        assert_eq!(err.entity(), Some(game));
    }

    #[test]
    fn test_validation_failure_has_no_entity() {
        let err = GameError::ValidationFailure {
            object: "Player",
            field: "name",
        };
        assert_eq!(err.entity(), None);
        assert_eq!(err.code(), "general.empty-field");
    }
}
