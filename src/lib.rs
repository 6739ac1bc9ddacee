//! # card-czar
//!
//! Session lifecycle core for a party card game: player membership,
//! card-pack composition, and the finite progression of a single game
//! instance from creation to completion, backed by a central registry
//! that resolves opaque identifiers to live in-memory objects.
//!
//! ## Design Principles
//!
//! 1. **The store is the source of truth**: games hold ids, never object
//!    references. Every membership change resolves its id through an
//!    [`ObjectStore`] at the moment of the call.
//!
//! 2. **Forward-only lifecycle**: a game's state strictly increases
//!    through `Initializing → WaitingForPlayers → Starting → InGame →
//!    Finished` and every mutation is gated on the current state.
//!
//! 3. **Validate once, trust after**: `Player`, `Card`, and `CardPack`
//!    enforce their field invariants at construction; the state machine
//!    consumes them without re-checking.
//!
//! 4. **Single logical writer**: no internal locking anywhere. Stores and
//!    games expect externally serialized access, which `&mut` receivers
//!    make explicit within one process.
//!
//! ## Modules
//!
//! - `core`: entity ids, kind tags, RNG
//! - `objects`: players, cards, card packs, and the storable union
//! - `store`: the identity registry with per-kind indices
//! - `game`: the session state machine
//! - `error`: the crate-wide error enum with stable message keys

pub mod core;
pub mod error;
pub mod game;
pub mod objects;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Entity, EntityId, GameRng, Kind};
pub use crate::error::{GameError, Result};
pub use crate::game::{Game, GameAction, GameState, MIN_PLAYERS};
pub use crate::objects::{Card, CardConfig, CardPack, CardPackConfig, GameObject, Player};
pub use crate::store::ObjectStore;
