//! Catalog page: search, filter and sort over the product grid.

use std::sync::Arc;

use leptos::prelude::*;
use rust_decimal::Decimal;
use storefront::{
    catalog::{Catalog, Product},
    query::{ProductQuery, Sort, SortField, SortOrder, parse_price_bound},
};
use tracing::debug;

use crate::{format::format_usd, routes::Route};

/// Raw form state behind the search box and the filter/sort dialogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilters {
    /// Search box text.
    pub search: String,

    /// Selected category label, empty for all.
    pub category: String,

    /// Minimum price as typed.
    pub min_price: String,

    /// Maximum price as typed.
    pub max_price: String,

    /// Selected tag label, empty for all.
    pub tag: String,

    /// Selected sort field, empty for catalog order.
    pub sort_field: String,

    /// Selected sort order.
    pub sort_order: String,
}

impl CatalogFilters {
    /// Translate the form state into a catalog query.
    ///
    /// Blank or unparsable inputs leave their criterion unset.
    pub fn to_query(&self) -> ProductQuery {
        ProductQuery {
            search: self.search.clone(),
            category: non_empty(&self.category),
            min_price: price_bound(&self.min_price),
            max_price: price_bound(&self.max_price),
            tag: non_empty(&self.tag),
            sort: self.sort(),
        }
    }

    fn sort(&self) -> Option<Sort> {
        let field = self.sort_field.parse::<SortField>().ok()?;
        let order = self.sort_order.parse::<SortOrder>().unwrap_or_default();

        Some(Sort { field, order })
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn price_bound(text: &str) -> Option<Decimal> {
    parse_price_bound(text).unwrap_or_else(|error| {
        debug!(%error, "ignoring price bound");

        None
    })
}

#[component]
fn SearchBar(
    filters: RwSignal<CatalogFilters>,
    show_filters: RwSignal<bool>,
    show_sort: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="mb-4 flex items-center justify-center pt-8">
            <label class="flex w-[320px] items-center rounded-lg bg-white px-3 py-2 shadow">
                <span class="sr-only">"Search products"</span>
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="16"
                    height="16"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="mr-2 text-gray-400 lucide lucide-search"
                    aria-hidden="true"
                >
                    <circle cx="11" cy="11" r="8"></circle>
                    <path d="m21 21-4.3-4.3"></path>
                </svg>
                <input
                    type="text"
                    placeholder="Search Products..."
                    class="flex-1 bg-transparent text-base outline-none"
                    prop:value=move || filters.with(|state| state.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);

                        filters.update(|state| state.search = value);
                    }
                />
            </label>
            <button
                type="button"
                aria-label="Filter products"
                class="ml-3 rounded-lg bg-[#c5c5c5] px-3 py-2 shadow transition-colors hover:bg-[#aaa8a8]"
                on:click=move |_| show_filters.set(true)
            >
                "Filter"
            </button>
            <button
                type="button"
                aria-label="Sort products"
                class="ml-3 rounded-lg bg-[#c5c5c5] px-3 py-2 shadow transition-colors hover:bg-[#aaa8a8]"
                on:click=move |_| show_sort.set(true)
            >
                "Sort"
            </button>
        </div>
    }
}

#[component]
fn Dialog(title: &'static str, show: RwSignal<bool>, children: Children) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40" role="dialog" aria-modal="true">
            <div class="relative w-full max-w-md rounded-lg bg-white p-6 shadow-lg">
                <button
                    type="button"
                    class="absolute right-3 top-2 text-2xl text-gray-500 hover:text-gray-800"
                    aria-label="Close"
                    on:click=move |_| show.set(false)
                >
                    "×"
                </button>
                <h2 class="mb-4 text-xl font-bold text-[#303cf3]">{title}</h2>
                <div class="flex flex-col gap-4">
                    {children()}
                    <button
                        type="button"
                        class="mt-2 rounded-lg bg-[#303cf3] px-4 py-2 text-white transition-colors hover:bg-[#2329b6]"
                        on:click=move |_| show.set(false)
                    >
                        {format!("Apply {}", title.trim_end_matches(" Products"))}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn label_options(
    labels: Vec<String>,
    filters: RwSignal<CatalogFilters>,
    selected: fn(&CatalogFilters) -> &str,
) -> impl IntoView {
    labels
        .into_iter()
        .map(|label| {
            let value = label.clone();
            let selected_value = label.clone();

            view! {
                <option
                    value=value
                    selected=move || filters.with(|state| selected(state) == selected_value)
                >
                    {label}
                </option>
            }
        })
        .collect_view()
}

#[component]
fn FilterDialog(
    filters: RwSignal<CatalogFilters>,
    show: RwSignal<bool>,
    categories: Vec<String>,
    tags: Vec<String>,
) -> impl IntoView {
    view! {
        <Dialog title="Filter Products" show=show>
            <label class="block">
                <span class="mb-1 block text-sm font-medium">"Category"</span>
                <select
                    class="w-full rounded border px-2 py-1"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);

                        filters.update(|state| state.category = value);
                    }
                >
                    <option value="">"All"</option>
                    {label_options(categories, filters, |state| &state.category)}
                </select>
            </label>
            <div class="flex gap-2">
                <label class="block flex-1">
                    <span class="mb-1 block text-sm font-medium">"Min Price"</span>
                    <input
                        type="number"
                        min="0"
                        class="w-full rounded border px-2 py-1"
                        prop:value=move || filters.with(|state| state.min_price.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);

                            filters.update(|state| state.min_price = value);
                        }
                    />
                </label>
                <label class="block flex-1">
                    <span class="mb-1 block text-sm font-medium">"Max Price"</span>
                    <input
                        type="number"
                        min="0"
                        class="w-full rounded border px-2 py-1"
                        prop:value=move || filters.with(|state| state.max_price.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);

                            filters.update(|state| state.max_price = value);
                        }
                    />
                </label>
            </div>
            <label class="block">
                <span class="mb-1 block text-sm font-medium">"Tag"</span>
                <select
                    class="w-full rounded border px-2 py-1"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);

                        filters.update(|state| state.tag = value);
                    }
                >
                    <option value="">"All"</option>
                    {label_options(tags, filters, |state| &state.tag)}
                </select>
            </label>
        </Dialog>
    }
}

#[component]
fn SortDialog(filters: RwSignal<CatalogFilters>, show: RwSignal<bool>) -> impl IntoView {
    let field_options = [
        ("", "Select"),
        ("title", "Name (A-Z/Z-A)"),
        ("price", "Price"),
        ("rating", "Rating"),
    ];
    let order_options = [("asc", "Ascending"), ("desc", "Descending")];

    view! {
        <Dialog title="Sort Products" show=show>
            <label class="block">
                <span class="mb-1 block text-sm font-medium">"Sort by"</span>
                <select
                    class="w-full rounded border px-2 py-1"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);

                        filters.update(|state| state.sort_field = value);
                    }
                >
                    {field_options
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option
                                    value=value
                                    selected=move || filters.with(|state| state.sort_field == value)
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="block">
                <span class="mb-1 block text-sm font-medium">"Order"</span>
                <select
                    class="w-full rounded border px-2 py-1"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);

                        filters.update(|state| state.sort_order = value);
                    }
                >
                    {order_options
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option
                                    value=value
                                    selected=move || filters.with(|state| state.sort_order == value)
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        </Dialog>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <a
            href=Route::Product(product.id).href()
            class="flex w-64 flex-col items-center rounded-lg bg-white p-4 shadow-md transition-colors duration-300 hover:bg-[#c5c5c5] hover:shadow-lg"
        >
            <img
                src=product.thumbnail
                alt=product.title.clone()
                class="mb-2 h-32 w-32 rounded object-contain"
            />
            <h2 class="text-center text-lg font-bold">{product.title}</h2>
            <p class="mb-2 text-center text-sm text-gray-600">{product.brand}</p>
            <span class="mb-1 text-xl font-semibold text-[#303cf3]">{format_usd(product.price)}</span>
            <p class="text-center text-xs text-gray-500">{product.category}</p>
        </a>
    }
}

#[component]
fn ProductGrid(catalog: Arc<Catalog>, filters: RwSignal<CatalogFilters>) -> impl IntoView {
    move || {
        let query = filters.with(CatalogFilters::to_query);
        let products = query.apply(&catalog);

        if products.is_empty() {
            return view! {
                <p class="p-6 text-center text-gray-600">"No products match your filters."</p>
            }
            .into_any();
        }

        view! {
            <div class="flex flex-wrap justify-center gap-6 p-6">
                {products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product.clone() /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    }
}

/// Catalog page: search box, filter and sort dialogs, product grid.
#[component]
pub fn HomePage(
    /// Catalog to browse.
    catalog: Arc<Catalog>,
) -> impl IntoView {
    let filters = RwSignal::new(CatalogFilters::default());
    let show_filters = RwSignal::new(false);
    let show_sort = RwSignal::new(false);
    let categories = catalog.categories();
    let tags = catalog.tags();

    view! {
        <div class="mt-[20px] flex justify-center">
            <section class="flex h-[calc(100vh-120px)] w-[98%] flex-col overflow-y-auto rounded-lg bg-[#e8e4e4]">
                <SearchBar filters=filters show_filters=show_filters show_sort=show_sort />
                {move || {
                    show_filters
                        .get()
                        .then(|| {
                            view! {
                                <FilterDialog
                                    filters=filters
                                    show=show_filters
                                    categories=categories.clone()
                                    tags=tags.clone()
                                />
                            }
                        })
                }}
                {move || {
                    show_sort
                        .get()
                        .then(|| view! { <SortDialog filters=filters show=show_sort /> })
                }}
                <ProductGrid catalog=catalog filters=filters />
            </section>
        </div>
    }
}
