//! Core primitives: entity identity, kind tags, and random selection.
//!
//! These are the building blocks the object store and the game state
//! machine are built on; they carry no session logic of their own.

pub mod entity;
pub mod rng;

pub use entity::{Entity, EntityId, Kind};
pub use rng::GameRng;
