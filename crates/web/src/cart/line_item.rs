//! One line of the cart page.

use leptos::prelude::*;

use crate::{quantity::QuantityStepper, routes::Route, state::CartHandle};

use super::CartLineItem;

#[component]
pub(super) fn CartLine(line: CartLineItem, cart: CartHandle) -> impl IntoView {
    let href = Route::Product(line.product_id).href();

    view! {
        <li class="flex items-center gap-4 rounded-lg bg-white p-3 shadow">
            <a href=href.clone() class="shrink-0">
                <img src=line.thumbnail alt=line.title.clone() class="h-16 w-16 object-contain" />
            </a>
            <div class="flex flex-1 flex-col">
                <a href=href class="font-semibold hover:underline">{line.title.clone()}</a>
                <p class="text-sm text-gray-600">{line.description}</p>
                <span class="text-sm text-gray-600">
                    {format!("{} × {}", line.unit_price, line.quantity)}
                </span>
            </div>
            <QuantityStepper product_id=line.product_id title=line.title cart=cart />
            <span class="w-24 text-right font-semibold">{line.line_total}</span>
        </li>
    }
}
