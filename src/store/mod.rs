//! Object store: the sole source of truth for live objects.
//!
//! Games never hold direct object references; membership changes resolve
//! ids through a store, so "does this id resolve to a live object of the
//! right kind" has exactly one answer at any time.

pub mod registry;

pub use registry::ObjectStore;
