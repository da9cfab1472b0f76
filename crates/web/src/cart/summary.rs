//! Cart total and checkout button.

use leptos::prelude::*;

#[component]
pub(super) fn CartSummary(total: String, on_checkout: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between border-t border-[#c5c5c5] pt-4">
            <p class="text-xl">
                <span class="font-medium">"Total: "</span>
                <span class="font-bold">{total}</span>
            </p>
            <button
                type="button"
                class="rounded-lg bg-[#06d0a2] px-6 py-2 font-semibold text-white transition-colors hover:bg-[#05b08a]"
                on:click=move |_| on_checkout.run(())
            >
                "Checkout"
            </button>
        </div>
    }
}
