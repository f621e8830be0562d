//! Shopping item collection use-cases.
//!
//! # Responsibility
//! - Provide create/read/update/delete/search/reorder entry points.
//! - Generate ids through the injected `IdProvider`.
//! - Report expected absence as values (`None`, `false`, empty results).
//!
//! # Invariants
//! - Ids are unique among live items.
//! - The live sequence stays gap-free and order-preserving after removals.
//! - `update` never touches `id` or `purchased`.
//! - A rejected reorder leaves the order unchanged.
//!
//! Logging is metadata-only: names and notes never reach log lines.

use crate::config::CollectionConfig;
use crate::model::id::{IdProvider, UuidIdProvider};
use crate::model::item::{validate_fields, Item, ItemId, ItemValidationError};
use crate::repo::item_store::ItemStore;
use crate::search::substring::SearchQuery;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reason a reorder request was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// There is nothing to reorder.
    EmptyCollection,
    /// The request does not name exactly as many ids as are live.
    LengthMismatch { expected: usize, actual: usize },
    /// The request names an id that is not live.
    UnknownId(ItemId),
    /// The request names the same id twice.
    DuplicateId(ItemId),
}

impl Display for ReorderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCollection => write!(f, "cannot reorder an empty collection"),
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "reorder expects {expected} ids, got {actual}"
            ),
            Self::UnknownId(id) => write!(f, "reorder names unknown item: {id}"),
            Self::DuplicateId(id) => write!(f, "reorder names item twice: {id}"),
        }
    }
}

impl Error for ReorderError {}

impl ReorderError {
    fn reason(&self) -> &'static str {
        match self {
            Self::EmptyCollection => "empty_collection",
            Self::LengthMismatch { .. } => "length_mismatch",
            Self::UnknownId(_) => "unknown_id",
            Self::DuplicateId(_) => "duplicate_id",
        }
    }
}

/// Errors from the hardened `try_*` entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemCollectionError {
    /// Input broke a hardened item rule.
    Validation(ItemValidationError),
    /// Target item does not exist.
    NotFound(ItemId),
    /// The id provider returned an id that is still live.
    DuplicateId(ItemId),
}

impl Display for ItemCollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
            Self::DuplicateId(id) => write!(f, "item id already in use: {id}"),
        }
    }
}

impl Error for ItemCollectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<ItemValidationError> for ItemCollectionError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Ordered, exclusively owned collection of shopping items.
///
/// Single-threaded: wrap it in `SharedItemCollection` for concurrent callers.
#[derive(Debug)]
pub struct ItemCollection<P: IdProvider = UuidIdProvider> {
    store: ItemStore,
    ids: P,
    config: CollectionConfig,
}

impl ItemCollection<UuidIdProvider> {
    /// Creates an empty collection with default config and UUID ids.
    pub fn new() -> Self {
        Self::with_config(CollectionConfig::default())
    }

    /// Creates an empty collection with custom config and UUID ids.
    pub fn with_config(config: CollectionConfig) -> Self {
        Self::with_parts(config, UuidIdProvider)
    }
}

impl Default for ItemCollection<UuidIdProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: IdProvider> ItemCollection<P> {
    /// Creates an empty collection using `ids` for id generation.
    pub fn with_id_provider(ids: P) -> Self {
        Self::with_parts(CollectionConfig::default(), ids)
    }

    pub fn with_parts(config: CollectionConfig, ids: P) -> Self {
        Self {
            store: ItemStore::new(&config),
            ids,
            config,
        }
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Allocated backing slots. Informational only.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Read-only snapshot of exactly the live items, in display order.
    pub fn get_all(&self) -> &[Item] {
        self.store.as_slice()
    }

    /// Finds the first item with `id`. Empty or unknown ids yield `None`.
    pub fn get_by_id(&self, id: &str) -> Option<&Item> {
        if id.is_empty() {
            return None;
        }
        self.store.get(id)
    }

    /// Appends a new unpurchased item with a freshly generated id.
    ///
    /// # Contract
    /// - No validation of `name` or `quantity`.
    /// - Returns a copy of the stored item.
    pub fn add(&mut self, name: impl Into<String>, quantity: i32, notes: Option<String>) -> Item {
        let item = Item::with_id(self.ids.next_id(), name, quantity, notes);
        // Out of contract: the id provider must yield unique ids.
        let duplicate = self.store.contains(&item.id);
        if duplicate {
            error!("event=item_add module=collection status=error reason=duplicate_id");
        }
        debug_assert!(!duplicate, "id provider returned a live id");
        self.store.push(item.clone());
        debug!(
            "event=item_add module=collection status=ok count={} capacity={}",
            self.store.len(),
            self.store.capacity()
        );
        item
    }

    /// Hardened `add`: rejects blank names, non-positive quantities and id
    /// collisions before mutating.
    pub fn try_add(
        &mut self,
        name: impl Into<String>,
        quantity: i32,
        notes: Option<String>,
    ) -> Result<Item, ItemCollectionError> {
        let item = Item::with_id(self.ids.next_id(), name, quantity, notes);
        item.validate()?;
        if self.store.contains(&item.id) {
            return Err(ItemCollectionError::DuplicateId(item.id));
        }
        self.store.push(item.clone());
        debug!(
            "event=item_add module=collection status=ok mode=hardened count={}",
            self.store.len()
        );
        Ok(item)
    }

    /// Replaces name, quantity and notes of an existing item in place.
    ///
    /// Returns the updated item, or `None` without mutation when `id` is unknown.
    pub fn update(
        &mut self,
        id: &str,
        name: impl Into<String>,
        quantity: i32,
        notes: Option<String>,
    ) -> Option<Item> {
        let Some(item) = self.store.get_mut(id) else {
            debug!("event=item_update module=collection status=not_found");
            return None;
        };
        item.apply_edit(name, quantity, notes);
        debug!("event=item_update module=collection status=ok");
        Some(item.clone())
    }

    /// Hardened `update`: validates input and reports unknown ids as errors.
    pub fn try_update(
        &mut self,
        id: &str,
        name: impl Into<String>,
        quantity: i32,
        notes: Option<String>,
    ) -> Result<Item, ItemCollectionError> {
        let name = name.into();
        validate_fields(id, &name, quantity)?;
        self.update(id, name, quantity, notes)
            .ok_or_else(|| ItemCollectionError::NotFound(id.to_string()))
    }

    /// Removes the item with `id`, shifting later items down by one.
    ///
    /// Returns `false` without mutation when `id` is unknown.
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.store.remove(id).is_some();
        debug!(
            "event=item_delete module=collection status={} count={}",
            if removed { "ok" } else { "not_found" },
            self.store.len()
        );
        removed
    }

    /// Returns live items whose name or notes contain `query`, ignoring case.
    ///
    /// A missing or empty query returns every live item. Matches keep their
    /// display order; no match yields an empty vector.
    pub fn search<'q>(&self, query: impl Into<Option<&'q str>>) -> Vec<&Item> {
        let items = self.store.as_slice();
        match SearchQuery::parse(query.into()) {
            None => items.iter().collect(),
            Some(query) => items.iter().filter(|item| query.matches(item)).collect(),
        }
    }

    /// Removes every purchased item, keeping survivors in relative order.
    ///
    /// Returns the number of removed items.
    pub fn clear_purchased(&mut self) -> usize {
        let removed = self.store.remove_where(|item| item.purchased);
        info!(
            "event=clear_purchased module=collection status=ok removed={} count={}",
            removed,
            self.store.len()
        );
        removed
    }

    /// Flips the purchase flag. Returns `false` when `id` is unknown.
    pub fn toggle_purchased(&mut self, id: &str) -> bool {
        match self.store.get_mut(id) {
            Some(item) => {
                let purchased = item.toggle_purchased();
                debug!(
                    "event=item_toggle module=collection status=ok purchased={}",
                    purchased
                );
                true
            }
            None => {
                debug!("event=item_toggle module=collection status=not_found");
                false
            }
        }
    }

    /// Replaces the display order with `ordered_ids`.
    ///
    /// Returns `false` without mutation unless `ordered_ids` names every live
    /// id exactly once.
    pub fn reorder<S: AsRef<str>>(&mut self, ordered_ids: &[S]) -> bool {
        self.try_reorder(ordered_ids).is_ok()
    }

    /// Like `reorder`, but reports why a request was rejected.
    pub fn try_reorder<S: AsRef<str>>(&mut self, ordered_ids: &[S]) -> Result<(), ReorderError> {
        let order = match self.plan_order(ordered_ids) {
            Ok(order) => order,
            Err(err) => {
                warn!(
                    "event=item_reorder module=collection status=rejected reason={} count={}",
                    err.reason(),
                    self.store.len()
                );
                return Err(err);
            }
        };
        self.store.apply_order(&order);
        debug!(
            "event=item_reorder module=collection status=ok count={}",
            self.store.len()
        );
        Ok(())
    }

    /// Maps requested ids to current positions, checking the id set first.
    fn plan_order<S: AsRef<str>>(&self, ordered_ids: &[S]) -> Result<Vec<usize>, ReorderError> {
        let live = self.store.len();
        if live == 0 {
            return Err(ReorderError::EmptyCollection);
        }
        if ordered_ids.len() != live {
            return Err(ReorderError::LengthMismatch {
                expected: live,
                actual: ordered_ids.len(),
            });
        }

        let mut seen = vec![false; live];
        let mut order = Vec::with_capacity(live);
        for id in ordered_ids {
            let id = id.as_ref();
            let index = self
                .store
                .position(id)
                .ok_or_else(|| ReorderError::UnknownId(id.to_string()))?;
            if std::mem::replace(&mut seen[index], true) {
                return Err(ReorderError::DuplicateId(id.to_string()));
            }
            order.push(index);
        }
        Ok(order)
    }
}
