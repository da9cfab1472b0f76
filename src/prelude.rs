//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, ProductId, SnapshotError},
    catalog::{Catalog, CatalogError, Dimensions, Product, Review, capitalize},
    entries::{CartEntry, cart_entries, cart_total},
    query::{ProductQuery, QueryError, Sort, SortField, SortOrder, parse_price_bound},
    storage::{KeyValueStore, MemoryStore, StorageError},
    store::{CART_SLOT, CartStore, StoreError},
};
