//! Shared cart state handed to every view.

use leptos::prelude::*;
use storefront::{
    cart::{Cart, ProductId},
    store::CartStore,
};

/// Slot backend used by the app.
#[cfg(target_arch = "wasm32")]
pub type BrowserSlot = crate::storage::LocalStorage;

/// Slot backend used by the app.
#[cfg(not(target_arch = "wasm32"))]
pub type BrowserSlot = storefront::storage::MemoryStore;

/// Reactive handle over the cart store.
///
/// Created once by the app root and passed to views as a property. Reads are
/// tracked, so views re-render when the cart changes.
#[derive(Debug, Clone, Copy)]
pub struct CartHandle {
    store: RwSignal<CartStore<BrowserSlot>>,
}

impl CartHandle {
    /// Rehydrate the cart from `storage`.
    pub fn new(storage: BrowserSlot) -> Self {
        Self {
            store: RwSignal::new(CartStore::initialize(storage)),
        }
    }

    /// Snapshot of the current cart.
    pub fn cart(self) -> Cart {
        self.store.with(|store| store.cart().clone())
    }

    /// Quantity of `product` in the cart.
    pub fn quantity(self, product: ProductId) -> u32 {
        self.store.with(|store| store.quantity(product))
    }

    /// Total number of units in the cart.
    pub fn total_quantity(self) -> u64 {
        self.store.with(|store| store.cart().total_quantity())
    }

    /// Add one unit of `product`.
    pub fn add(self, product: ProductId) {
        self.store.update(|store| {
            store.add_to_cart(product);
        });
    }

    /// Remove one unit of `product`.
    pub fn remove(self, product: ProductId) {
        self.store.update(|store| {
            store.remove_from_cart(product);
        });
    }

    /// Empty the cart.
    pub fn clear(self) {
        self.store.update(|store| {
            store.clear_cart();
        });
    }
}
