//! Product detail page.

use std::sync::Arc;

use leptos::prelude::*;
use storefront::{
    cart::ProductId,
    catalog::{Catalog, Dimensions, Product, Review},
};

use crate::{
    format::{format_measure, format_usd},
    notice::Notice,
    quantity::QuantityStepper,
    state::CartHandle,
};

const MAX_STARS: u8 = 5;

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_STARS));
    let empty = usize::from(MAX_STARS) - filled;

    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

fn dimensions_label(dimensions: Option<&Dimensions>) -> String {
    dimensions.map_or_else(
        || "-".to_string(),
        |dimensions| {
            format!(
                "{} x {} x {}",
                format_measure(Some(dimensions.width)),
                format_measure(Some(dimensions.height)),
                format_measure(Some(dimensions.depth)),
            )
        },
    )
}

fn gallery_images(product: &Product) -> Vec<String> {
    if product.images.is_empty() {
        vec![product.thumbnail.clone()]
    } else {
        product.images.clone()
    }
}

#[component]
fn Gallery(title: String, images: Vec<String>) -> impl IntoView {
    let selected = RwSignal::new(images.first().cloned().unwrap_or_default());
    let main_alt = title.clone();

    view! {
        <div class="flex flex-col items-center gap-3">
            <img
                src=move || selected.get()
                alt=main_alt
                class="h-72 w-72 rounded-lg bg-white object-contain shadow"
            />
            <div class="flex flex-wrap justify-center gap-2">
                {images
                    .into_iter()
                    .enumerate()
                    .map(|(index, image)| {
                        let source = image.clone();
                        let highlighted = image.clone();
                        let label = format!("Show image {} of {title}", index + 1);

                        view! {
                            <button
                                type="button"
                                aria-label=label
                                class=move || {
                                    if selected.with(|current| *current == highlighted) {
                                        "rounded border-2 border-[#303cf3] bg-white p-0.5"
                                    } else {
                                        "rounded border-2 border-transparent bg-white p-0.5"
                                    }
                                }
                                on:click=move |_| selected.set(image.clone())
                            >
                                <img src=source alt="" class="h-16 w-16 object-contain" />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Details(product: Product) -> impl IntoView {
    let rows = [
        ("Brand", product.brand.clone().unwrap_or_else(|| "-".to_string())),
        ("Category", product.category.clone()),
        ("Rating", product.rating.normalize().to_string()),
        ("Stock", product.stock.to_string()),
        (
            "Availability",
            product
                .availability_status
                .clone()
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Weight", format_measure(product.weight)),
        ("Dimensions", dimensions_label(product.dimensions.as_ref())),
    ];

    view! {
        <div class="flex flex-col gap-3">
            <h1 class="text-3xl font-bold text-[#303cf3]">{product.title}</h1>
            <p class="text-gray-700">{product.description}</p>
            <span class="text-2xl font-semibold">{format_usd(product.price)}</span>
            <dl class="grid grid-cols-2 gap-x-6 gap-y-1 text-sm">
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <dt class="font-medium text-gray-600">{label}</dt>
                            <dd>{value}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
            <div class="flex flex-wrap gap-2">
                {product
                    .tags
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <span class="rounded-full bg-[#c5c5c5] px-2 py-0.5 text-xs">{tag}</span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Render model for one review.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ReviewLine {
    reviewer: String,
    email: String,
    date: String,
    rating_label: String,
    stars: String,
    comment: String,
}

impl From<Review> for ReviewLine {
    fn from(review: Review) -> Self {
        Self {
            date: review.date.strftime("%Y-%m-%d").to_string(),
            rating_label: format!("{} out of {MAX_STARS}", review.rating),
            stars: stars(review.rating),
            reviewer: review.reviewer_name,
            email: review.reviewer_email,
            comment: review.comment,
        }
    }
}

#[component]
fn ReviewList(reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return view! { <p class="text-gray-600">"No reviews."</p> }.into_any();
    }

    view! {
        <ul class="flex flex-col gap-3">
            {reviews
                .into_iter()
                .map(ReviewLine::from)
                .map(|line| {
                    view! {
                        <li class="rounded-lg bg-white p-3 shadow">
                            <div class="flex items-center justify-between">
                                <span class="font-semibold">{line.reviewer}</span>
                                <span class="text-xs text-gray-500">{line.date}</span>
                            </div>
                            <p class="text-xs text-gray-500">{line.email}</p>
                            <span class="text-[#f5a524]" aria-label=line.rating_label>
                                {line.stars}
                            </span>
                            <p class="text-sm text-gray-700">{line.comment}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

/// Product detail page with gallery, cart controls and reviews.
#[component]
pub fn ProductPage(
    /// Catalog to look the product up in.
    catalog: Arc<Catalog>,
    /// Product shown.
    product_id: ProductId,
    /// Cart the controls update.
    cart: CartHandle,
) -> impl IntoView {
    let Some(product) = catalog.get(product_id).cloned() else {
        return view! {
            <Notice title="Product not found" message=format!("No product has id {product_id}.") />
        }
        .into_any();
    };

    let images = gallery_images(&product);
    let reviews = product.reviews.clone();
    let title = product.title.clone();

    view! {
        <div class="mt-[20px] flex justify-center">
            <section class="flex w-[98%] flex-col gap-8 rounded-lg bg-[#e8e4e4] p-8">
                <div class="flex flex-wrap justify-center gap-10">
                    <Gallery title=title.clone() images=images />
                    <div class="flex max-w-xl flex-col gap-6">
                        <Details product=product />
                        <QuantityStepper product_id=product_id title=title cart=cart />
                    </div>
                </div>
                <div>
                    <h2 class="mb-3 text-xl font-bold">"Reviews"</h2>
                    <ReviewList reviews=reviews />
                </div>
            </section>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn stars_fill_up_to_rating() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn dimensions_are_joined_or_dashed() {
        let dimensions = Dimensions {
            width: Decimal::new(1510, 2),
            height: Decimal::new(2, 0),
            depth: Decimal::new(2275, 2),
        };

        assert_eq!(dimensions_label(Some(&dimensions)), "15.1 x 2 x 22.75");
        assert_eq!(dimensions_label(None), "-");
    }

    #[test]
    fn review_line_shows_reviewer_and_email() -> TestResult {
        let catalog = Catalog::from_json(
            r#"{"products": [{"id": 1, "title": "Lamp", "price": 10, "reviews": [
                {"rating": 4, "comment": "Bright.", "date": "2024-05-23T08:56:21.618Z",
                 "reviewerName": "Eleanor Collins", "reviewerEmail": "eleanor.collins@x.dummyjson.com"}
            ]}]}"#,
        )?;
        let review = catalog
            .get(1)
            .and_then(|product| product.reviews.first())
            .ok_or("missing review")?;

        let line = ReviewLine::from(review.clone());

        assert_eq!(line.reviewer, "Eleanor Collins");
        assert_eq!(line.email, "eleanor.collins@x.dummyjson.com");
        assert_eq!(line.date, "2024-05-23");
        assert_eq!(line.rating_label, "4 out of 5");
        assert_eq!(line.stars, "★★★★☆");
        assert_eq!(line.comment, "Bright.");

        Ok(())
    }

    #[test]
    fn gallery_falls_back_to_thumbnail() -> TestResult {
        let catalog = Catalog::from_json(
            r#"{"products": [
                {"id": 1, "title": "Bare", "price": 1, "thumbnail": "bare.png"},
                {"id": 2, "title": "Shown", "price": 1, "thumbnail": "t.png", "images": ["a.png", "b.png"]}
            ]}"#,
        )?;

        let bare = catalog.get(1).ok_or("missing product 1")?;
        let shown = catalog.get(2).ok_or("missing product 2")?;

        assert_eq!(gallery_images(bare), vec!["bare.png".to_string()]);
        assert_eq!(
            gallery_images(shown),
            vec!["a.png".to_string(), "b.png".to_string()]
        );

        Ok(())
    }
}
