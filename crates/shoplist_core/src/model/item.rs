//! Shopping item domain model.
//!
//! # Responsibility
//! - Define the canonical record stored by the item collection.
//! - Provide the hardened validation rules used by `try_*` entry points.
//!
//! # Invariants
//! - `id` is assigned once at creation and never rewritten.
//! - `purchased` starts as `false` and only changes through `toggle_purchased`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque identifier assigned to an item for its whole lifetime.
///
/// Kept as a type alias: the collection compares ids but never parses them.
pub type ItemId = String;

/// Canonical shopping list record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable id produced by an `IdProvider`.
    pub id: ItemId,
    /// Display text. Baseline operations accept an empty name.
    pub name: String,
    /// Requested count. Baseline operations accept zero and negatives.
    pub quantity: i32,
    /// Optional free text searched alongside `name`.
    pub notes: Option<String>,
    /// Purchase flag.
    pub purchased: bool,
}

impl Item {
    /// Creates a not-yet-purchased item with a caller-provided id.
    ///
    /// # Invariants
    /// - `purchased` starts as `false`.
    /// - This constructor does not validate name or quantity.
    pub fn with_id(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        quantity: i32,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            notes,
            purchased: false,
        }
    }

    /// Replaces the editable fields, leaving `id` and `purchased` untouched.
    pub fn apply_edit(&mut self, name: impl Into<String>, quantity: i32, notes: Option<String>) {
        self.name = name.into();
        self.quantity = quantity;
        self.notes = notes;
    }

    /// Flips the purchase flag and returns the new state.
    pub fn toggle_purchased(&mut self) -> bool {
        self.purchased = !self.purchased;
        self.purchased
    }

    /// Checks the hardened rules: non-empty id, non-blank name, positive quantity.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is empty.
    /// - `EmptyName` when `name` is empty or whitespace only.
    /// - `NonPositiveQuantity` when `quantity <= 0`.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        validate_fields(&self.id, &self.name, self.quantity)
    }
}

/// Validation errors reported by the hardened item rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyId,
    EmptyName,
    NonPositiveQuantity(i32),
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "item id must not be empty"),
            Self::EmptyName => write!(f, "item name must not be empty"),
            Self::NonPositiveQuantity(quantity) => {
                write!(f, "item quantity must be positive, got {quantity}")
            }
        }
    }
}

impl Error for ItemValidationError {}

pub(crate) fn validate_fields(id: &str, name: &str, quantity: i32) -> Result<(), ItemValidationError> {
    if id.is_empty() {
        return Err(ItemValidationError::EmptyId);
    }
    if name.trim().is_empty() {
        return Err(ItemValidationError::EmptyName);
    }
    if quantity <= 0 {
        return Err(ItemValidationError::NonPositiveQuantity(quantity));
    }
    Ok(())
}
