//! Cart store
//!
//! Owns the current [`Cart`] and writes every new value through to a
//! [`KeyValueStore`] slot before the mutation returns.

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    cart::{Cart, ProductId, SnapshotError},
    storage::{KeyValueStore, StorageError},
};

/// Name of the slot holding the cart snapshot.
pub const CART_SLOT: &str = "cart";

/// Errors raised while persisting the cart.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The cart could not be encoded.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// The backend refused the snapshot.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Cart state container with write-through persistence.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    cart: Cart,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Rehydrate the cart from `storage`.
    ///
    /// A missing, unreadable or malformed snapshot yields an empty cart.
    pub fn initialize(storage: S) -> Self {
        let cart = match storage.read(CART_SLOT) {
            Ok(Some(snapshot)) => Cart::from_snapshot(&snapshot).unwrap_or_else(|error| {
                warn!(%error, "discarding malformed cart snapshot");

                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(error) => {
                warn!(%error, "cart snapshot could not be read");

                Cart::new()
            }
        };

        debug!(products = cart.len(), "cart initialized");

        Self { storage, cart }
    }

    /// Current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Quantity of `product` in the current cart.
    pub fn quantity(&self, product: ProductId) -> u32 {
        self.cart.quantity(product)
    }

    /// Add one unit of `product`.
    pub fn add_to_cart(&mut self, product: ProductId) -> &Cart {
        let next = self.cart.with_added(product);

        debug!(product, quantity = next.quantity(product), "added to cart");

        self.replace(next)
    }

    /// Remove one unit of `product`; absent products leave the cart unchanged.
    pub fn remove_from_cart(&mut self, product: ProductId) -> &Cart {
        let next = self.cart.with_removed(product);

        debug!(product, quantity = next.quantity(product), "removed from cart");

        self.replace(next)
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> &Cart {
        debug!(products = self.cart.len(), "clearing cart");

        self.replace(Cart::new())
    }

    /// Write the current cart to the slot, overwriting the previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the snapshot cannot be encoded or written.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let snapshot = self.cart.to_snapshot()?;

        self.storage.write(CART_SLOT, &snapshot)?;

        Ok(())
    }

    /// Backing store.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the container and return the backing store.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn replace(&mut self, next: Cart) -> &Cart {
        self.cart = next;

        if let Err(error) = self.persist() {
            warn!(%error, "cart changed in memory but was not persisted");
        }

        &self.cart
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use crate::storage::{MemoryStore, MockKeyValueStore};

    use super::*;

    fn empty_mock() -> MockKeyValueStore {
        let mut storage = MockKeyValueStore::new();

        storage.expect_read().returning(|_| Ok(None));

        storage
    }

    #[test]
    fn initialize_reads_cart_slot_once() {
        let mut storage = MockKeyValueStore::new();

        storage
            .expect_read()
            .times(1)
            .returning(|key| {
                assert_eq!(key, CART_SLOT, "initialize should read the cart slot");

                Ok(Some(r#"{"5":"2","9":"1"}"#.to_string()))
            });

        let store = CartStore::initialize(storage);

        assert_eq!(store.cart(), &Cart::from_iter([(5, 2), (9, 1)]));
    }

    #[test]
    fn initialize_recovers_from_read_failure() {
        let mut storage = MockKeyValueStore::new();

        storage
            .expect_read()
            .returning(|_| Err(StorageError::Unavailable("no window".to_string())));

        let store = CartStore::initialize(storage);

        assert!(store.cart().is_empty());
    }

    #[test]
    fn initialize_does_not_write() {
        let mut storage = empty_mock();

        storage.expect_write().never();

        let store = CartStore::initialize(storage);

        assert!(store.cart().is_empty());
    }

    #[test]
    fn each_mutation_writes_one_full_snapshot() {
        let mut storage = empty_mock();
        let mut sequence = Sequence::new();

        for expected in [r#"{"5":1}"#, r#"{"5":2}"#, r#"{"5":1}"#, "{}"] {
            storage
                .expect_write()
                .times(1)
                .in_sequence(&mut sequence)
                .returning(move |key, value| {
                    assert_eq!(key, CART_SLOT, "writes should target the cart slot");
                    assert_eq!(value, expected, "unexpected snapshot");

                    Ok(())
                });
        }

        let mut store = CartStore::initialize(storage);

        store.add_to_cart(5);
        store.add_to_cart(5);
        store.remove_from_cart(5);
        store.clear_cart();
    }

    #[test]
    fn noop_remove_still_persists_once() {
        let mut storage = empty_mock();

        storage
            .expect_write()
            .times(1)
            .returning(|_, value| {
                assert_eq!(value, "{}", "empty cart should persist as an empty object");

                Ok(())
            });

        let mut store = CartStore::initialize(storage);

        assert!(store.remove_from_cart(7).is_empty());
    }

    #[test]
    fn failed_write_keeps_new_cart_in_memory() {
        let mut storage = empty_mock();

        storage.expect_write().returning(|key, _| {
            Err(StorageError::Rejected {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        });

        let mut store = CartStore::initialize(storage);

        store.add_to_cart(3);

        assert_eq!(store.quantity(3), 1);
    }

    #[test]
    fn persist_reports_storage_errors() {
        let mut storage = empty_mock();

        storage
            .expect_write()
            .returning(|_, _| Err(StorageError::Unavailable("gone".to_string())));

        let mut store = CartStore::initialize(storage);

        assert!(matches!(store.persist(), Err(StoreError::Storage(_))));
    }

    #[test]
    fn state_survives_reinitialization() {
        let mut store = CartStore::initialize(MemoryStore::new());

        store.add_to_cart(1);
        store.add_to_cart(2);
        store.add_to_cart(2);

        let reloaded = CartStore::initialize(store.into_storage());

        assert_eq!(reloaded.cart(), &Cart::from_iter([(1, 1), (2, 2)]));
    }
}
