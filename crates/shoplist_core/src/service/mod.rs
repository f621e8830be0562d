//! Core use-case services.
//!
//! # Responsibility
//! - Expose the shopping list operation surface to UI/HTTP callers.
//! - Keep callers decoupled from storage and search details.

pub mod item_collection;
pub mod shared;
