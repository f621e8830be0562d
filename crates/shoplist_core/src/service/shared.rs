//! Mutex-guarded handle for callers that share one collection across threads.
//!
//! # Invariants
//! - Every operation runs under the single lock guarding the whole collection.
//! - A poisoned lock is recovered: collection operations never leave the
//!   store half-mutated before a panic can occur.

use crate::model::id::{IdProvider, UuidIdProvider};
use crate::service::item_collection::ItemCollection;
use std::sync::{Arc, Mutex, PoisonError};

/// Cloneable, thread-safe handle to one `ItemCollection`.
pub struct SharedItemCollection<P: IdProvider = UuidIdProvider> {
    inner: Arc<Mutex<ItemCollection<P>>>,
}

impl<P: IdProvider> SharedItemCollection<P> {
    pub fn new(collection: ItemCollection<P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(collection)),
        }
    }

    /// Runs `f` with exclusive access to the collection.
    ///
    /// Return owned data (clones, counts, flags) from `f`; borrows cannot
    /// outlive the lock.
    pub fn with<T>(&self, f: impl FnOnce(&mut ItemCollection<P>) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl<P: IdProvider> Clone for SharedItemCollection<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SharedItemCollection<UuidIdProvider> {
    fn default() -> Self {
        Self::new(ItemCollection::new())
    }
}
