//! Storage layer for shopping items.
//!
//! # Responsibility
//! - Own the in-memory backing container and its growth policy.
//! - Keep compaction and permutation details out of the service layer.
//!
//! # Invariants
//! - Storage is exclusively owned by one collection; nothing else aliases it.

pub mod item_store;
