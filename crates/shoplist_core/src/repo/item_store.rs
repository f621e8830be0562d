//! Owned backing storage for shopping items.
//!
//! # Responsibility
//! - Hold live items contiguously in display order.
//! - Apply the configured growth policy when an append finds the store full.
//! - Compact on removal so positions `0..len` are exactly the live items.
//!
//! # Invariants
//! - `len() <= capacity()`.
//! - Removal preserves the relative order of surviving items.
//! - The store never hands out aliased mutable access to more than one slot.

use crate::config::{CollectionConfig, GrowthPolicy};
use crate::model::item::Item;

/// Contiguous, order-preserving item storage.
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    growth: GrowthPolicy,
}

impl ItemStore {
    pub fn new(config: &CollectionConfig) -> Self {
        Self {
            items: Vec::with_capacity(config.initial_capacity),
            growth: config.growth,
        }
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slots currently allocated, live or free.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Live items in display order. Never exposes free slots.
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Position of the first item with `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Appends at the end of the live sequence, growing storage if full.
    pub fn push(&mut self, item: Item) {
        self.grow_if_full();
        self.items.push(item);
    }

    /// Removes the item with `id` and shifts later items down by one.
    pub fn remove(&mut self, id: &str) -> Option<Item> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Removes every item matching `predicate`, compacting in one pass.
    ///
    /// Returns the number of removed items.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&Item) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }

    /// Rearranges items so that new position `i` holds the item previously at
    /// `order[i]`.
    ///
    /// Callers validate that `order` is a permutation of `0..len()`. Positions
    /// not named by `order` keep their relative order after the named ones, so
    /// no item is ever dropped.
    pub fn apply_order(&mut self, order: &[usize]) {
        let capacity = self.items.capacity();
        let mut slots: Vec<Option<Item>> = std::mem::take(&mut self.items)
            .into_iter()
            .map(Some)
            .collect();

        let mut reordered = Vec::with_capacity(capacity);
        for &index in order {
            if let Some(item) = slots.get_mut(index).and_then(Option::take) {
                reordered.push(item);
            }
        }
        reordered.extend(slots.into_iter().flatten());
        self.items = reordered;
    }

    fn grow_if_full(&mut self) {
        if self.items.len() < self.items.capacity() {
            return;
        }
        let additional = match self.growth {
            GrowthPolicy::Exact => 1,
            GrowthPolicy::Doubling => self.items.capacity().max(1),
        };
        self.items.reserve_exact(additional);
    }
}

#[cfg(test)]
mod tests {
    use super::ItemStore;
    use crate::config::{CollectionConfig, GrowthPolicy};
    use crate::model::item::Item;

    fn store_with(ids: &[&str], growth: GrowthPolicy) -> ItemStore {
        let mut store = ItemStore::new(&CollectionConfig::default().with_growth(growth));
        for id in ids {
            store.push(Item::with_id(*id, *id, 1, None));
        }
        store
    }

    fn ids(store: &ItemStore) -> Vec<&str> {
        store.as_slice().iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn exact_growth_keeps_len_within_capacity() {
        let mut store = store_with(&[], GrowthPolicy::Exact);
        assert_eq!(store.capacity(), 0);

        for n in 1..=5 {
            store.push(Item::with_id(format!("i{n}"), "x", 1, None));
            assert_eq!(store.len(), n);
            assert!(store.capacity() >= store.len());
        }
    }

    #[test]
    fn doubling_growth_reserves_at_least_twice() {
        let mut store = store_with(&["a", "b"], GrowthPolicy::Doubling);
        let before = store.capacity();
        while store.len() < store.capacity() {
            let id = format!("fill{}", store.len());
            store.push(Item::with_id(id, "x", 1, None));
        }

        store.push(Item::with_id("overflow", "x", 1, None));
        assert!(store.capacity() >= 2 * before.max(1));
    }

    #[test]
    fn initial_capacity_is_reserved_up_front() {
        let store = ItemStore::new(&CollectionConfig::default().with_initial_capacity(8));
        assert!(store.capacity() >= 8);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_compacts_and_preserves_order() {
        let mut store = store_with(&["a", "b", "c", "d"], GrowthPolicy::Doubling);

        let removed = store.remove("b").expect("b should be removed");
        assert_eq!(removed.id, "b");
        assert_eq!(ids(&store), ["a", "c", "d"]);
        assert!(store.remove("b").is_none());
    }

    #[test]
    fn remove_where_counts_removed_items() {
        let mut store = store_with(&["a", "b", "c", "d"], GrowthPolicy::Doubling);

        let removed = store.remove_where(|item| item.id == "a" || item.id == "c");
        assert_eq!(removed, 2);
        assert_eq!(ids(&store), ["b", "d"]);
    }

    #[test]
    fn apply_order_permutes_items() {
        let mut store = store_with(&["a", "b", "c"], GrowthPolicy::Doubling);

        store.apply_order(&[2, 0, 1]);
        assert_eq!(ids(&store), ["c", "a", "b"]);
    }

    #[test]
    fn apply_order_never_drops_unnamed_items() {
        let mut store = store_with(&["a", "b", "c"], GrowthPolicy::Doubling);

        store.apply_order(&[1]);
        assert_eq!(ids(&store), ["b", "a", "c"]);
    }
}
