//! Core domain logic for the shopping list.
//! This crate is the single source of truth for list invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{CollectionConfig, GrowthPolicy};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::id::{IdProvider, SequentialIdProvider, UuidIdProvider};
pub use model::item::{Item, ItemId, ItemValidationError};
pub use repo::item_store::ItemStore;
pub use search::substring::SearchQuery;
pub use service::item_collection::{ItemCollection, ItemCollectionError, ReorderError};
pub use service::shared::SharedItemCollection;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
