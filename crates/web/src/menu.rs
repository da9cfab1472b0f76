//! Top navigation bar.

use leptos::prelude::*;

use crate::{routes::Route, state::CartHandle};

/// Top navigation bar with the shop brand and the cart link.
#[component]
pub fn Menu(cart: CartHandle) -> impl IntoView {
    view! {
        <header class="flex h-[80px] justify-center rounded-b-lg bg-[#e8e4e4]">
            <nav class="flex w-3/5 items-center justify-between">
                <a
                    href=Route::Home.href()
                    class="flex items-center rounded-lg p-1.5 pb-3 transition-colors hover:bg-[#c5c5c5]"
                >
                    <span class="text-3xl font-extrabold italic text-[#303cf3]">"rocket"</span>
                    <span class="ms-0.5 mt-[-20px] text-base font-extrabold italic text-[#303cf3]">
                        "LAB"
                    </span>
                    <span class="text-3xl font-extrabold italic text-[#303cf3]">"shop"</span>
                </a>
                <a
                    href=Route::Cart.href()
                    class="relative flex rounded-lg bg-[#c5c5c5] p-1.5 transition-colors hover:bg-[#aaa8a8]"
                    aria-label=move || format!("Shopping cart, {} items", cart.total_quantity())
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="28"
                        height="28"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#303cf3"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class="lucide lucide-shopping-cart"
                        aria-hidden="true"
                    >
                        <circle cx="8" cy="21" r="1"></circle>
                        <circle cx="19" cy="21" r="1"></circle>
                        <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"></path>
                    </svg>
                    {move || {
                        let count = cart.total_quantity();

                        (count > 0)
                            .then(|| {
                                view! {
                                    <span class="absolute -right-2 -top-2 rounded-full bg-[#06d0a2] px-1.5 text-xs font-bold text-white">
                                        {count}
                                    </span>
                                }
                            })
                    }}
                </a>
            </nav>
        </header>
    }
}
