//! Item search entry points.
//!
//! # Responsibility
//! - Normalize caller queries once per search.
//! - Keep match rules in one place for every collection caller.

pub mod substring;
