//! Game sessions: the lifecycle state machine and gated membership.
//!
//! ## Key Types
//!
//! - `GameState`: the strictly ordered, forward-only lifecycle
//! - `GameAction`: gated mutations and their permitted states
//! - `Game`: a session holding a roster and pack selection by id

pub mod session;
pub mod state;

pub use session::{Game, MIN_PLAYERS};
pub use state::{GameAction, GameState};
