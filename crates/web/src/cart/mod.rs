//! Cart page and its render model.

use std::sync::Arc;

use leptos::prelude::*;
use storefront::{
    cart::{Cart, ProductId},
    catalog::Catalog,
    entries::{cart_entries, cart_total},
};

use crate::{
    format::format_usd,
    modal::ConfirmationModal,
    routes::{Route, navigate},
    state::CartHandle,
};

pub(super) mod line_item;
pub(super) mod summary;

use line_item::CartLine;
use summary::CartSummary;

/// Render model for one line of the cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CartLineItem {
    /// Product in the cart.
    product_id: ProductId,

    /// Product title.
    title: String,

    /// Product description.
    description: String,

    /// Thumbnail image.
    thumbnail: String,

    /// Formatted unit price.
    unit_price: String,

    /// Units in the cart.
    quantity: u32,

    /// Formatted unit price times quantity.
    line_total: String,
}

/// Lines and formatted total for `cart`, skipping products the catalog lacks.
pub(crate) fn cart_lines(cart: &Cart, catalog: &Catalog) -> (Vec<CartLineItem>, String) {
    let entries = cart_entries(cart, catalog);
    let total = cart_total(&entries).to_string();

    let lines = entries
        .iter()
        .map(|entry| CartLineItem {
            product_id: entry.product_id,
            title: entry.product.title.clone(),
            description: entry.product.description.clone(),
            thumbnail: entry.product.thumbnail.clone(),
            unit_price: format_usd(entry.product.price),
            quantity: entry.quantity.get(),
            line_total: format_usd(entry.line_total()),
        })
        .collect();

    (lines, total)
}

/// Cart page: entry lines, total, checkout.
#[component]
pub fn CartPage(
    /// Catalog used to resolve cart entries.
    catalog: Arc<Catalog>,
    /// Cart shown and edited.
    cart: CartHandle,
) -> impl IntoView {
    let purchase_completed = RwSignal::new(false);

    let checkout = Callback::new(move |()| {
        tracing::info!(units = cart.total_quantity(), "checkout");

        cart.clear();
        purchase_completed.set(true);
    });

    let close_modal = Callback::new(move |()| {
        purchase_completed.set(false);
        navigate(Route::Home);
    });

    view! {
        <div class="mt-[20px] flex justify-center">
            <section class="flex w-[98%] max-w-3xl flex-col gap-4 rounded-lg bg-[#e8e4e4] p-6">
                <h1 class="text-2xl font-bold text-[#303cf3]">"Your Cart"</h1>
                {move || {
                    let (lines, total) = cart_lines(&cart.cart(), &catalog);

                    if lines.is_empty() {
                        return view! { <p class="text-gray-600">"Your cart is empty."</p> }
                            .into_any();
                    }

                    view! {
                        <ul class="flex flex-col gap-3">
                            {lines
                                .into_iter()
                                .map(|line| view! { <CartLine line=line cart=cart /> })
                                .collect_view()}
                        </ul>
                        <CartSummary total=total on_checkout=checkout />
                    }
                        .into_any()
                }}
                <a
                    href=Route::Home.href()
                    class="self-start rounded-lg bg-[#c5c5c5] px-4 py-2 transition-colors hover:bg-[#aaa8a8]"
                >
                    "Continue Shopping"
                </a>
            </section>
        </div>
        {move || {
            purchase_completed
                .get()
                .then(|| {
                    view! {
                        <ConfirmationModal
                            title="Purchase Completed!"
                            message="Thank you for your purchase! Your order was successful."
                            on_close=close_modal
                        />
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn catalog() -> Result<Catalog, storefront::catalog::CatalogError> {
        Catalog::from_json(
            r#"{"products": [
                {"id": 5, "title": "Lamp", "description": "Warm desk light", "price": 10.25, "thumbnail": "lamp.png"},
                {"id": 9, "title": "Rug", "description": "Wool runner", "price": 99.99, "thumbnail": "rug.png"}
            ]}"#,
        )
    }

    #[test]
    fn lines_are_formatted_in_product_order() -> TestResult {
        let catalog = catalog()?;
        let cart = Cart::from_iter([(9, 1), (5, 2)]);

        let (lines, total) = cart_lines(&cart, &catalog);

        assert_eq!(
            lines,
            vec![
                CartLineItem {
                    product_id: 5,
                    title: "Lamp".to_string(),
                    description: "Warm desk light".to_string(),
                    thumbnail: "lamp.png".to_string(),
                    unit_price: "$10.25".to_string(),
                    quantity: 2,
                    line_total: "$20.50".to_string(),
                },
                CartLineItem {
                    product_id: 9,
                    title: "Rug".to_string(),
                    description: "Wool runner".to_string(),
                    thumbnail: "rug.png".to_string(),
                    unit_price: "$99.99".to_string(),
                    quantity: 1,
                    line_total: "$99.99".to_string(),
                },
            ]
        );
        assert_eq!(total, "$120.49");

        Ok(())
    }

    #[test]
    fn unknown_products_are_left_out() -> TestResult {
        let catalog = catalog()?;
        let cart = Cart::from_iter([(404, 3)]);

        let (lines, total) = cart_lines(&cart, &catalog);

        assert!(lines.is_empty());
        assert_eq!(total, "$0.00");

        Ok(())
    }
}
