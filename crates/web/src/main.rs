//! Storefront web application
//!
//! Client-side Leptos app over the bundled catalog. The cart lives in
//! `localStorage` and every page load rehydrates it.

use std::sync::Arc;

use leptos::prelude::*;
use storefront::catalog::Catalog;

mod cart;
mod format;
mod home;
mod logging;
mod menu;
mod modal;
mod notice;
mod product;
mod quantity;
mod routes;
mod state;

#[cfg(target_arch = "wasm32")]
mod storage;

use cart::CartPage;
use home::HomePage;
use menu::Menu;
use notice::Notice;
use product::ProductPage;
use routes::{Route, current_route};
use state::{BrowserSlot, CartHandle};

/// App shell: menu bar plus the page for the current path.
#[component]
fn App() -> impl IntoView {
    let catalog = match Catalog::bundled() {
        Ok(catalog) => Arc::new(catalog),
        Err(error) => {
            tracing::error!(%error, "failed to load catalog");

            return view! {
                <Notice title="Catalog unavailable" message=error.to_string() />
            }
            .into_any();
        }
    };

    let cart = CartHandle::new(BrowserSlot::default());
    let route = current_route();

    tracing::debug!(?route, products = catalog.len(), "rendering page");

    let page = match route {
        Route::Home => view! { <HomePage catalog=catalog /> }.into_any(),
        Route::Cart => view! { <CartPage catalog=catalog cart=cart /> }.into_any(),
        Route::Product(product_id) => {
            view! { <ProductPage catalog=catalog product_id=product_id cart=cart /> }.into_any()
        }
        Route::NotFound => {
            view! { <Notice title="Page not found" message="Nothing lives at this address." /> }
                .into_any()
        }
    };

    view! {
        <div class="min-h-screen bg-white text-black">
            <Menu cart=cart />
            <main>{page}</main>
        </div>
    }
    .into_any()
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(error) = logging::init_subscriber() {
        leptos::logging::error!("failed to install log subscriber: {error}");
    }

    leptos::mount::mount_to_body(App);
}
