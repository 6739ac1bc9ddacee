//! Game lifecycle states and action gating.
//!
//! The lifecycle is strictly ordered and forward-only:
//!
//! `Initializing < WaitingForPlayers < Starting < InGame < Finished`
//!
//! A state change must strictly increase; a game never revisits a state.
//! Each mutating action on a game is gated by a fixed set of permitted
//! states, checked with [`GameAction::allowed_in`].

use serde::{Deserialize, Serialize};

/// The finite lifecycle of a game session.
///
/// - `Initializing`: created, setup information still being supplied.
/// - `WaitingForPlayers`: setup complete, waiting for the roster to fill
///   or for the owner to start once the minimum is met.
/// - `Starting`: started, waiting for players to confirm connection.
/// - `InGame`: running.
/// - `Finished`: over and ready to be evicted from the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Created, not all game information supplied yet.
    Initializing = 0,
    /// Waiting for the player cap or a manual start.
    WaitingForPlayers = 1,
    /// Started, players verifying connection status.
    Starting = 2,
    /// Running.
    InGame = 3,
    /// Over; the session can be destroyed.
    Finished = 4,
}

impl GameState {
    /// All states, in lifecycle order.
    pub const ALL: [GameState; 5] = [
        GameState::Initializing,
        GameState::WaitingForPlayers,
        GameState::Starting,
        GameState::InGame,
        GameState::Finished,
    ];

    /// Numeric position in the lifecycle ordering.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameState::Initializing => "INITIALIZING",
            GameState::WaitingForPlayers => "WAITING_FOR_PLAYERS",
            GameState::Starting => "STARTING",
            GameState::InGame => "IN_GAME",
            GameState::Finished => "FINISHED",
        };
        write!(f, "{name}")
    }
}

/// The gated mutations a game supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Add or remove a card pack.
    ChangeCardPack,
    /// Add or remove a player.
    ChangePlayers,
    /// Start the game.
    StartGame,
}

impl GameAction {
    /// Whether this action is permitted in the given state.
    #[must_use]
    pub fn allowed_in(self, state: GameState) -> bool {
        match self {
            GameAction::ChangeCardPack => matches!(
                state,
                GameState::Initializing | GameState::WaitingForPlayers
            ),
            GameAction::ChangePlayers => matches!(
                state,
                GameState::Initializing
                    | GameState::WaitingForPlayers
                    | GameState::Starting
                    | GameState::InGame
            ),
            GameAction::StartGame => state == GameState::WaitingForPlayers,
        }
    }
}

impl std::fmt::Display for GameAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameAction::ChangeCardPack => "changeCardPack",
            GameAction::ChangePlayers => "changePlayers",
            GameAction::StartGame => "startGame",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_order() {
        for window in GameState::ALL.windows(2) {
            assert!(window[0] < window[1]);
        }
        assert_eq!(GameState::Initializing.rank(), 0);
        assert_eq!(GameState::Finished.rank(), 4);
    }

    #[test]
    fn test_change_card_pack_gating() {
        let allowed = [GameState::Initializing, GameState::WaitingForPlayers];
        for state in GameState::ALL {
            assert_eq!(
                GameAction::ChangeCardPack.allowed_in(state),
                allowed.contains(&state)
            );
        }
    }

    #[test]
    fn test_change_players_gating() {
        for state in GameState::ALL {
            assert_eq!(
                GameAction::ChangePlayers.allowed_in(state),
                state < GameState::Finished
            );
        }
    }

    #[test]
    fn test_start_game_gating() {
        for state in GameState::ALL {
            assert_eq!(
                GameAction::StartGame.allowed_in(state),
                state == GameState::WaitingForPlayers
            );
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&GameState::InGame).unwrap();
        let state: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, GameState::InGame);
    }
}
