//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `shoplist_core` linkage without any UI/HTTP host.
//! - Keep output deterministic for quick local sanity checks.

use shoplist_core::{ItemCollection, SequentialIdProvider};

fn main() {
    println!("shoplist_core ping={}", shoplist_core::ping());
    println!("shoplist_core version={}", shoplist_core::core_version());

    // Empty collection probe; demo data seeding belongs to the host app.
    let collection = ItemCollection::with_id_provider(SequentialIdProvider::default());
    println!(
        "shoplist_core items={} capacity={}",
        collection.len(),
        collection.capacity()
    );
}
