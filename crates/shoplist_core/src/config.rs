//! Collection configuration.

/// How the backing storage grows when an append finds it full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// Add exactly one slot per append on a full store.
    Exact,
    /// Double the capacity (minimum one slot).
    #[default]
    Doubling,
}

/// Configuration for an `ItemCollection`.
///
/// # Example
///
/// ```rust
/// use shoplist_core::{CollectionConfig, GrowthPolicy};
///
/// let config = CollectionConfig::default()
///     .with_initial_capacity(16)
///     .with_growth(GrowthPolicy::Exact);
/// assert_eq!(config.initial_capacity, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollectionConfig {
    /// Slots reserved up front (default: 0).
    pub initial_capacity: usize,
    /// Growth strategy for a full store (default: doubling).
    pub growth: GrowthPolicy,
}

impl CollectionConfig {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of slots reserved when the collection is created.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the growth strategy used when an append finds the store full.
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }
}
