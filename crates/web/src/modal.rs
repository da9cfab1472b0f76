//! Confirmation dialog.

use leptos::prelude::*;

/// Blocking confirmation dialog with a single OK button.
#[component]
pub fn ConfirmationModal(
    /// Dialog heading.
    title: &'static str,
    /// Body text.
    message: &'static str,
    /// Called when the user dismisses the dialog.
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/50"
            role="dialog"
            aria-modal="true"
        >
            <div class="mx-4 w-full max-w-sm rounded bg-white p-6 text-black">
                <h2 class="mb-4 text-2xl font-bold">{title}</h2>
                <p class="mb-4 text-gray-700">{message}</p>
                <button
                    type="button"
                    class="rounded bg-[#303cf3] px-4 py-2 text-white transition-colors hover:bg-[#2329b6]"
                    on:click=move |_| on_close.run(())
                >
                    "OK"
                </button>
            </div>
        </div>
    }
}
