//! Item id generation capability.
//!
//! The collection only needs unique strings; the format is up to the provider.

use crate::model::item::ItemId;
use uuid::Uuid;

/// Produces ids for newly added items.
///
/// Implementations must never return an id that is still in use by a live
/// item. A collision is outside the collection contract.
pub trait IdProvider {
    fn next_id(&mut self) -> ItemId;
}

/// Default provider backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn next_id(&mut self) -> ItemId {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic provider yielding `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdProvider {
    prefix: String,
    next: u64,
}

impl SequentialIdProvider {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdProvider {
    fn default() -> Self {
        Self::new("item")
    }
}

impl IdProvider for SequentialIdProvider {
    fn next_id(&mut self) -> ItemId {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<F> IdProvider for F
where
    F: FnMut() -> ItemId,
{
    fn next_id(&mut self) -> ItemId {
        self()
    }
}
