//! Table rendering for command output.

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use storefront::{
    catalog::{Dimensions, Product},
    entries::{CartEntry, cart_total},
};
use tabled::{
    Table,
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};

fn usd(amount: Decimal) -> String {
    Money::from_decimal(amount, iso::USD).to_string()
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

fn finish(builder: Builder) -> Table {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Alignment::center());

    table
}

/// Write the product listing.
pub(crate) fn write_products(out: &mut impl io::Write, products: &[&Product]) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "No products match your filters.");
    }

    let mut builder = Builder::default();

    builder.push_record(["Id", "Title", "Category", "Price", "Rating", "Stock"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.title.clone(),
            product.category.clone(),
            usd(product.price),
            product.rating.normalize().to_string(),
            product.stock.to_string(),
        ]);
    }

    let mut table = finish(builder);

    table.modify(Columns::new(3..6), Alignment::right());

    writeln!(out, "{table}")
}

fn dimensions_label(dimensions: Option<&Dimensions>) -> String {
    or_dash(dimensions.map(|dimensions| {
        format!(
            "{} x {} x {}",
            dimensions.width.normalize(),
            dimensions.height.normalize(),
            dimensions.depth.normalize()
        )
    }))
}

/// Write one product's details followed by its reviews.
pub(crate) fn write_product(out: &mut impl io::Write, product: &Product) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Field", "Value"]);

    let rows = [
        ("Id", product.id.to_string()),
        ("Title", product.title.clone()),
        ("Description", product.description.clone()),
        ("Brand", or_dash(product.brand.clone())),
        ("Category", product.category.clone()),
        ("Price", usd(product.price)),
        ("Rating", product.rating.normalize().to_string()),
        ("Stock", product.stock.to_string()),
        ("Availability", or_dash(product.availability_status.clone())),
        (
            "Weight",
            or_dash(product.weight.map(|weight| weight.normalize().to_string())),
        ),
        ("Dimensions", dimensions_label(product.dimensions.as_ref())),
        ("Tags", product.tags.join(", ")),
    ];

    for (field, value) in rows {
        builder.push_record([field.to_string(), value]);
    }

    writeln!(out, "{}", finish(builder))?;

    if product.reviews.is_empty() {
        return writeln!(out, "No reviews.");
    }

    let mut reviews = Builder::default();

    reviews.push_record(["Date", "Reviewer", "Email", "Rating", "Comment"]);

    for review in &product.reviews {
        reviews.push_record([
            review.date.strftime("%Y-%m-%d").to_string(),
            review.reviewer_name.clone(),
            review.reviewer_email.clone(),
            format!("{}/5", review.rating),
            review.comment.clone(),
        ]);
    }

    let mut table = finish(reviews);

    table.modify(Columns::new(3..4), Alignment::right());

    writeln!(out, "{table}")
}

/// Write the cart lines and total.
pub(crate) fn write_cart(out: &mut impl io::Write, entries: &[CartEntry<'_>]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "Your cart is empty.");
    }

    let mut builder = Builder::default();

    builder.push_record(["Id", "Product", "Unit Price", "Quantity", "Line Total"]);

    for entry in entries {
        builder.push_record([
            entry.product_id.to_string(),
            entry.product.title.clone(),
            usd(entry.product.price),
            entry.quantity.to_string(),
            usd(entry.line_total()),
        ]);
    }

    let mut table = finish(builder);

    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(out, "Total: {}", cart_total(entries))
}

#[cfg(test)]
mod tests {
    use storefront::{cart::Cart, catalog::Catalog, entries::cart_entries};
    use testresult::TestResult;

    use super::*;

    fn rendered(
        write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let mut out = Vec::new();

        write(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn product_listing_shows_prices() -> TestResult {
        let catalog = Catalog::bundled()?;
        let products: Vec<&Product> = catalog.iter().take(2).collect();

        let output = rendered(|out| write_products(out, &products))?;

        assert!(output.contains("Essence Mascara Lash Princess"));
        assert!(output.contains("$9.99"));
        assert!(output.contains("Eyeshadow Palette with Mirror"));

        Ok(())
    }

    #[test]
    fn empty_listing_has_message() -> TestResult {
        let output = rendered(|out| write_products(out, &[]))?;

        assert_eq!(output, "No products match your filters.\n");

        Ok(())
    }

    #[test]
    fn product_without_reviews_says_so() -> TestResult {
        let catalog =
            Catalog::from_json(r#"{"products": [{"id": 3, "title": "Plain", "price": 2}]}"#)?;
        let product = catalog.get(3).ok_or("missing product")?;

        let output = rendered(|out| write_product(out, product))?;

        assert!(output.contains("Plain"));
        assert!(output.ends_with("No reviews.\n"));

        Ok(())
    }

    #[test]
    fn product_reviews_list_reviewer_email() -> TestResult {
        let catalog = Catalog::from_json(
            r#"{"products": [{"id": 8, "title": "Kettle", "price": 30, "reviews": [
                {"rating": 5, "comment": "Boils fast.", "date": "2024-05-23T08:56:21.618Z",
                 "reviewerName": "Lucas Gordon", "reviewerEmail": "lucas.gordon@x.dummyjson.com"}
            ]}]}"#,
        )?;
        let product = catalog.get(8).ok_or("missing product")?;

        let output = rendered(|out| write_product(out, product))?;

        assert!(output.contains("Lucas Gordon"));
        assert!(output.contains("lucas.gordon@x.dummyjson.com"));
        assert!(output.contains("2024-05-23"));
        assert!(output.contains("5/5"));

        Ok(())
    }

    #[test]
    fn cart_lists_lines_and_total() -> TestResult {
        let catalog = Catalog::bundled()?;
        let cart = Cart::from_iter([(16, 3), (1, 2)]);
        let entries = cart_entries(&cart, &catalog);

        let output = rendered(|out| write_cart(out, &entries))?;

        assert!(output.contains("Apple"));
        assert!(output.contains("$19.98"));
        assert!(output.contains("$5.97"));
        assert!(output.ends_with("Total: $25.95\n"));

        Ok(())
    }

    #[test]
    fn empty_cart_has_message() -> TestResult {
        let output = rendered(|out| write_cart(out, &[]))?;

        assert_eq!(output, "Your cart is empty.\n");

        Ok(())
    }
}
