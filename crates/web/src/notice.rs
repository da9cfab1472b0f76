//! Full-page message panel.

use leptos::prelude::*;

use crate::routes::Route;

/// Centered message panel with a link back to the catalog.
#[component]
pub fn Notice(
    /// Panel heading.
    title: &'static str,
    /// Body text.
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="mt-[20px] flex justify-center">
            <section class="flex w-[98%] flex-col items-center gap-4 rounded-lg bg-[#e8e4e4] p-10">
                <h1 class="text-2xl font-bold text-[#303cf3]">{title}</h1>
                <p class="text-gray-700">{message}</p>
                <a
                    href=Route::Home.href()
                    class="rounded-lg bg-[#c5c5c5] px-4 py-2 transition-colors hover:bg-[#aaa8a8]"
                >
                    "Back to products"
                </a>
            </section>
        </div>
    }
}
