//! Cart entries
//!
//! Joins a [`Cart`] against a [`Catalog`]. The join is lenient: cart entries
//! whose product no longer exists in the catalog are skipped, never reported.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use tracing::debug;

use crate::{
    cart::{Cart, ProductId},
    catalog::{Catalog, Product},
};

/// A cart line paired with its catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry<'c> {
    /// Product identifier
    pub product_id: ProductId,

    /// Units in the cart
    pub quantity: NonZeroU32,

    /// Matching catalog record
    pub product: &'c Product,
}

impl CartEntry<'_> {
    /// Unit price multiplied by quantity, saturating at the `Decimal` bounds.
    pub fn line_total(&self) -> Decimal {
        self.product
            .price
            .saturating_mul(Decimal::from(self.quantity.get()))
    }
}

/// Join `cart` against `catalog`, in ascending product order.
pub fn cart_entries<'c>(cart: &Cart, catalog: &'c Catalog) -> Vec<CartEntry<'c>> {
    cart.iter()
        .filter_map(|(product_id, quantity)| {
            let Some(product) = catalog.get(product_id) else {
                debug!(product_id, "skipping cart entry with no catalog record");

                return None;
            };

            Some(CartEntry {
                product_id,
                quantity,
                product,
            })
        })
        .collect()
}

/// Total of all entry line totals, in USD, saturating at the `Decimal` bounds.
pub fn cart_total(entries: &[CartEntry<'_>]) -> Money<'static, Currency> {
    let total = entries
        .iter()
        .map(CartEntry::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    Money::from_decimal(total, iso::USD)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn catalog() -> Result<Catalog, crate::catalog::CatalogError> {
        Catalog::from_json(
            r#"{"products": [
                {"id": 5, "title": "Lamp", "price": 10.25},
                {"id": 9, "title": "Rug", "price": 99.99}
            ]}"#,
        )
    }

    #[test]
    fn entries_pair_quantities_with_products() -> TestResult {
        let catalog = catalog()?;
        let cart = Cart::from_iter([(9, 1), (5, 2)]);

        let entries = cart_entries(&cart, &catalog);
        let summary: Vec<(ProductId, u32, &str)> = entries
            .iter()
            .map(|entry| (entry.product_id, entry.quantity.get(), entry.product.title.as_str()))
            .collect();

        assert_eq!(summary, vec![(5, 2, "Lamp"), (9, 1, "Rug")]);

        Ok(())
    }

    #[test]
    fn entries_skip_unknown_products() -> TestResult {
        let catalog = catalog()?;
        let cart = Cart::from_iter([(5, 1), (404, 3)]);

        let entries = cart_entries(&cart, &catalog);

        assert_eq!(entries.len(), 1);
        assert!(entries.iter().all(|entry| entry.product_id == 5));

        Ok(())
    }

    #[test]
    fn line_total_multiplies_price() -> TestResult {
        let catalog = catalog()?;
        let cart = Cart::from_iter([(5, 3)]);

        let entries = cart_entries(&cart, &catalog);
        let line_totals: Vec<Decimal> = entries.iter().map(CartEntry::line_total).collect();

        assert_eq!(line_totals, vec![Decimal::new(3075, 2)]);

        Ok(())
    }

    #[test]
    fn total_sums_lines() -> TestResult {
        let catalog = catalog()?;
        let cart = Cart::from_iter([(5, 2), (9, 1), (404, 7)]);

        let total = cart_total(&cart_entries(&cart, &catalog));

        assert_eq!(total, Money::from_decimal(Decimal::new(12049, 2), iso::USD));

        Ok(())
    }

    #[test]
    fn oversized_prices_saturate_instead_of_overflowing() -> TestResult {
        let catalog = Catalog::from_json(
            r#"{"products": [
                {"id": 1, "title": "Vault", "price": 40000000000000000000000000000.0},
                {"id": 2, "title": "Lamp", "price": 10.25}
            ]}"#,
        )?;
        let cart = Cart::from_iter([(1, 2), (2, 1)]);

        let entries = cart_entries(&cart, &catalog);
        let line_totals: Vec<Decimal> = entries.iter().map(CartEntry::line_total).collect();

        assert_eq!(line_totals, vec![Decimal::MAX, Decimal::new(1025, 2)]);
        assert_eq!(cart_total(&entries), Money::from_decimal(Decimal::MAX, iso::USD));

        Ok(())
    }

    #[test]
    fn total_of_nothing_is_zero() {
        assert_eq!(cart_total(&[]), Money::from_minor(0, iso::USD));
    }
}
