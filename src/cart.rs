//! Cart
//!
//! A cart maps product identifiers to strictly positive quantities. Values are
//! never edited in place by callers: each operation produces the next cart,
//! which the [`CartStore`](crate::store::CartStore) then persists.

use std::{
    collections::{BTreeMap, BTreeSet, btree_map},
    num::NonZeroU32,
};

use serde::Deserialize;
use thiserror::Error;

/// Product identifier.
pub type ProductId = u32;

/// Errors raised while encoding or decoding a cart snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot is not a JSON object of quantities.
    #[error("snapshot is not a JSON object of quantities: {0}")]
    Json(#[from] serde_json::Error),

    /// A key could not be read as a positive product identifier.
    #[error("invalid product identifier in snapshot: {0:?}")]
    InvalidProductId(String),

    /// Two keys name the same product, e.g. `"5"` and `"05"`.
    #[error("product {0} appears more than once in snapshot")]
    DuplicateProductId(ProductId),

    /// A quantity could not be read as an integer.
    #[error("invalid quantity {value:?} for product {product}")]
    InvalidQuantity {
        /// Product the quantity belongs to
        product: ProductId,
        /// Raw value found in the snapshot
        value: String,
    },
}

/// Quantity as it may appear in a persisted snapshot.
///
/// Older snapshots stored quantities as strings, so both forms are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnapshotQuantity {
    Number(i64),
    Text(String),
}

impl SnapshotQuantity {
    fn parse(self, product: ProductId) -> Result<i64, SnapshotError> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Text(text) => {
                text.trim()
                    .parse::<i64>()
                    .map_err(|_err| SnapshotError::InvalidQuantity {
                        product,
                        value: text,
                    })
            }
        }
    }
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: BTreeMap<ProductId, NonZeroU32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity held for `product`, zero when absent.
    pub fn quantity(&self, product: ProductId) -> u32 {
        self.items.get(&product).map_or(0, |quantity| quantity.get())
    }

    /// Check whether `product` has at least one unit in the cart.
    pub fn contains(&self, product: ProductId) -> bool {
        self.items.contains_key(&product)
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items
            .values()
            .map(|quantity| u64::from(quantity.get()))
            .sum()
    }

    /// Iterate entries in ascending product order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.items.iter(),
        }
    }

    /// The next cart after adding one unit of `product`.
    #[must_use]
    pub fn with_added(&self, product: ProductId) -> Self {
        let mut next = self.clone();

        next.items
            .entry(product)
            .and_modify(|quantity| *quantity = quantity.saturating_add(1))
            .or_insert(NonZeroU32::MIN);

        next
    }

    /// The next cart after removing one unit of `product`.
    ///
    /// Removing the last unit drops the key; removing an absent product
    /// returns an identical cart.
    #[must_use]
    pub fn with_removed(&self, product: ProductId) -> Self {
        let mut next = self.clone();

        if let btree_map::Entry::Occupied(mut entry) = next.items.entry(product) {
            match NonZeroU32::new(entry.get().get() - 1) {
                Some(decremented) => {
                    entry.insert(decremented);
                }
                None => {
                    entry.remove();
                }
            }
        }

        next
    }

    /// Encode the cart as its persisted JSON snapshot, e.g. `{"5":2,"9":1}`.
    ///
    /// # Errors
    ///
    /// Returns a `SnapshotError` if serialization fails.
    pub fn to_snapshot(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(&self.items)?)
    }

    /// Decode a persisted JSON snapshot.
    ///
    /// Entries whose quantity is zero or negative are dropped.
    ///
    /// # Errors
    ///
    /// Returns a `SnapshotError` if the text is not a JSON object, a key is not a
    /// positive integer, two keys name the same product, or a quantity is not an
    /// integer.
    pub fn from_snapshot(snapshot: &str) -> Result<Self, SnapshotError> {
        let raw: BTreeMap<String, SnapshotQuantity> = serde_json::from_str(snapshot)?;
        let mut items = BTreeMap::new();
        let mut seen = BTreeSet::new();

        for (key, value) in raw {
            let product = key
                .trim()
                .parse::<ProductId>()
                .ok()
                .filter(|product| *product > 0)
                .ok_or_else(|| SnapshotError::InvalidProductId(key.clone()))?;

            if !seen.insert(product) {
                return Err(SnapshotError::DuplicateProductId(product));
            }

            let quantity = value.parse(product)?;

            if quantity <= 0 {
                continue;
            }

            let quantity = u32::try_from(quantity)
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or_else(|| SnapshotError::InvalidQuantity {
                    product,
                    value: quantity.to_string(),
                })?;

            items.insert(product, quantity);
        }

        Ok(Self { items })
    }
}

impl FromIterator<(ProductId, u32)> for Cart {
    fn from_iter<I: IntoIterator<Item = (ProductId, u32)>>(iter: I) -> Self {
        let items = iter
            .into_iter()
            .filter_map(|(product, quantity)| NonZeroU32::new(quantity).map(|q| (product, q)))
            .collect();

        Self { items }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = (ProductId, NonZeroU32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cart entries.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, ProductId, NonZeroU32>,
}

impl Iterator for Iter<'_> {
    type Item = (ProductId, NonZeroU32);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(product, quantity)| (*product, *quantity))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn add_creates_entry_at_one() {
        let cart = Cart::new().with_added(5);

        assert_eq!(cart.quantity(5), 1);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn add_increments_existing_entry() {
        let cart = Cart::new().with_added(5).with_added(5);

        assert_eq!(cart.quantity(5), 2);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn add_leaves_previous_cart_untouched() {
        let before = Cart::from_iter([(3, 1)]);
        let after = before.with_added(3);

        assert_eq!(before.quantity(3), 1);
        assert_eq!(after.quantity(3), 2);
    }

    #[test]
    fn remove_decrements_quantity() {
        let cart = Cart::from_iter([(5, 3)]).with_removed(5);

        assert_eq!(cart.quantity(5), 2);
    }

    #[test]
    fn remove_last_unit_deletes_key() {
        let cart = Cart::from_iter([(5, 1), (9, 2)]).with_removed(5);

        assert!(!cart.contains(5));
        assert_eq!(cart, Cart::from_iter([(9, 2)]));
    }

    #[test]
    fn remove_absent_product_is_noop() {
        let cart = Cart::from_iter([(1, 4)]);

        assert_eq!(cart.with_removed(7), cart);
        assert_eq!(Cart::new().with_removed(7), Cart::new());
    }

    #[test]
    fn add_then_remove_restores_cart() {
        let carts = [
            Cart::new(),
            Cart::from_iter([(1, 1)]),
            Cart::from_iter([(1, 3), (2, 1)]),
        ];

        for cart in carts {
            for product in [1, 2, 42] {
                assert_eq!(
                    cart.with_added(product).with_removed(product),
                    cart,
                    "round trip for product {product} on {cart:?}"
                );
            }
        }
    }

    #[test]
    fn from_iter_drops_zero_quantities() {
        let cart = Cart::from_iter([(1, 0), (2, 2)]);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity(1), 0);
    }

    #[test]
    fn total_quantity_sums_entries() {
        let cart = Cart::from_iter([(1, 2), (2, 3)]);

        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn iter_is_in_ascending_product_order() {
        let cart = Cart::from_iter([(9, 1), (2, 1), (5, 1)]);
        let products: Vec<ProductId> = cart.iter().map(|(product, _)| product).collect();

        assert_eq!(products, vec![2, 5, 9]);
    }

    #[test]
    fn to_snapshot_uses_string_keys() -> TestResult {
        let cart = Cart::from_iter([(5, 2), (9, 1)]);

        assert_eq!(cart.to_snapshot()?, r#"{"5":2,"9":1}"#);

        Ok(())
    }

    #[test]
    fn empty_cart_snapshot_is_empty_object() -> TestResult {
        assert_eq!(Cart::new().to_snapshot()?, "{}");

        Ok(())
    }

    #[test]
    fn from_snapshot_accepts_numbers() -> TestResult {
        let cart = Cart::from_snapshot(r#"{"5":2,"9":1}"#)?;

        assert_eq!(cart, Cart::from_iter([(5, 2), (9, 1)]));

        Ok(())
    }

    #[test]
    fn from_snapshot_accepts_numeric_strings() -> TestResult {
        let cart = Cart::from_snapshot(r#"{"5":"2","9":"1"}"#)?;

        assert_eq!(cart, Cart::from_iter([(5, 2), (9, 1)]));

        Ok(())
    }

    #[test]
    fn from_snapshot_drops_non_positive_quantities() -> TestResult {
        let cart = Cart::from_snapshot(r#"{"1":0,"2":-3,"3":4}"#)?;

        assert_eq!(cart, Cart::from_iter([(3, 4)]));

        Ok(())
    }

    #[test]
    fn from_snapshot_rejects_garbage() {
        let result = Cart::from_snapshot("not json");

        assert!(matches!(result, Err(SnapshotError::Json(_))));
    }

    #[test]
    fn from_snapshot_rejects_non_object() {
        let result = Cart::from_snapshot("[1, 2, 3]");

        assert!(matches!(result, Err(SnapshotError::Json(_))));
    }

    #[test]
    fn from_snapshot_rejects_bad_keys() {
        let result = Cart::from_snapshot(r#"{"abc":1}"#);

        assert!(matches!(result, Err(SnapshotError::InvalidProductId(key)) if key == "abc"));

        let result = Cart::from_snapshot(r#"{"0":1}"#);

        assert!(matches!(result, Err(SnapshotError::InvalidProductId(_))));
    }

    #[test]
    fn from_snapshot_rejects_keys_naming_the_same_product() {
        let result = Cart::from_snapshot(r#"{"5":1,"05":3," 5":7}"#);

        assert!(matches!(result, Err(SnapshotError::DuplicateProductId(5))));

        let result = Cart::from_snapshot(r#"{"5":0,"05":3}"#);

        assert!(matches!(result, Err(SnapshotError::DuplicateProductId(5))));
    }

    #[test]
    fn from_snapshot_rejects_bad_quantities() {
        let result = Cart::from_snapshot(r#"{"4":"many"}"#);

        assert!(matches!(
            result,
            Err(SnapshotError::InvalidQuantity { product: 4, .. })
        ));
    }

    #[test]
    fn snapshot_survives_encoding() -> TestResult {
        let cart = Cart::from_iter([(1, 1), (30, 12)]);

        assert_eq!(Cart::from_snapshot(&cart.to_snapshot()?)?, cart);

        Ok(())
    }
}
