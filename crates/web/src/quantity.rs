//! Cart quantity stepper.

use leptos::prelude::*;
use storefront::cart::ProductId;

use crate::state::CartHandle;

/// `-` / count / `+` control bound to one product's cart quantity.
///
/// The decrement button is disabled while the product is not in the cart.
#[component]
pub fn QuantityStepper(
    /// Product the control adjusts.
    product_id: ProductId,
    /// Product title, used in button labels.
    title: String,
    /// Cart to update.
    cart: CartHandle,
) -> impl IntoView {
    let remove_label = format!("Remove one {title} from cart");
    let add_label = format!("Add one {title} to cart");

    view! {
        <div class="flex items-center gap-3">
            <button
                type="button"
                aria-label=remove_label
                class="h-9 w-9 rounded-lg bg-[#c5c5c5] text-lg font-bold transition-colors hover:bg-[#aaa8a8] disabled:cursor-not-allowed disabled:opacity-50"
                disabled=move || cart.quantity(product_id) == 0
                on:click=move |_| cart.remove(product_id)
            >
                "-"
            </button>
            <span class="min-w-[2ch] text-center text-lg font-semibold" aria-live="polite">
                {move || cart.quantity(product_id)}
            </span>
            <button
                type="button"
                aria-label=add_label
                class="h-9 w-9 rounded-lg bg-[#303cf3] text-lg font-bold text-white transition-colors hover:bg-[#2329b6]"
                on:click=move |_| cart.add(product_id)
            >
                "+"
            </button>
        </div>
    }
}
