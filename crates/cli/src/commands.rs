//! Command execution.

use std::io;

use storefront::{
    cart::ProductId,
    catalog::{Catalog, Product},
    entries::cart_entries,
    storage::KeyValueStore,
    store::CartStore,
};
use tracing::info;

use crate::{CliError, config::Command, render};

fn product(catalog: &Catalog, id: ProductId) -> Result<&Product, CliError> {
    catalog.get(id).ok_or(CliError::UnknownProduct(id))
}

/// Run `command` against `catalog` and `store`, writing results to `out`.
///
/// # Errors
///
/// Returns a `CliError` for unknown product ids or failed output writes.
pub(crate) fn execute<S: KeyValueStore>(
    command: &Command,
    catalog: &Catalog,
    store: &mut CartStore<S>,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    match command {
        Command::Products(args) => {
            let products = args.to_query().apply(catalog);

            render::write_products(out, &products)?;
        }
        Command::Show { id } => render::write_product(out, product(catalog, *id)?)?,
        Command::Cart => render::write_cart(out, &cart_entries(store.cart(), catalog))?,
        Command::Add { id } => {
            let title = &product(catalog, *id)?.title;
            let quantity = store.add_to_cart(*id).quantity(*id);

            writeln!(out, "Added {title}. {quantity} in cart.")?;
        }
        Command::Remove { id } => {
            let title = catalog
                .get(*id)
                .map_or_else(|| format!("Product {id}"), |product| product.title.clone());

            if !store.cart().contains(*id) {
                store.remove_from_cart(*id);

                writeln!(out, "{title} was not in the cart.")?;

                return Ok(());
            }

            let quantity = store.remove_from_cart(*id).quantity(*id);

            writeln!(out, "Removed {title}. {quantity} in cart.")?;
        }
        Command::Clear => {
            store.clear_cart();

            writeln!(out, "Cart cleared.")?;
        }
        Command::Checkout => {
            let entries = cart_entries(store.cart(), catalog);

            if entries.is_empty() {
                writeln!(out, "Your cart is empty.")?;

                return Ok(());
            }

            render::write_cart(out, &entries)?;

            info!(lines = entries.len(), "checkout");

            store.clear_cart();

            writeln!(
                out,
                "Purchase Completed! Thank you for your purchase! Your order was successful."
            )?;
        }
    }

    Ok(())
}
