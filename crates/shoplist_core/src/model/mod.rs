//! Domain model for shopping list records.
//!
//! # Responsibility
//! - Define the canonical item record used by collection logic.
//! - Define the id generation capability injected into the collection.
//!
//! # Invariants
//! - Every item is identified by an opaque `ItemId` string.
//! - Removal is a hard delete; there is no tombstone state.

pub mod id;
pub mod item;
