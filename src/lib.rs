//! Storefront
//!
//! Catalog browsing and a shopping cart that survives restarts. The cart is a
//! mapping from product identifier to quantity, owned by a [`store::CartStore`]
//! which writes every change through to a durable key-value slot.

pub mod cart;
pub mod catalog;
pub mod entries;
pub mod prelude;
pub mod query;
pub mod storage;
pub mod store;
