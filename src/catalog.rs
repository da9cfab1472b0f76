//! Catalog
//!
//! The read-only, ordered list of products loaded from the bundled dataset.

use jiff::Timestamp;
use rust_decimal::Decimal;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use smallvec::SmallVec;
use thiserror::Error;

use crate::cart::ProductId;

const BUNDLED_CATALOG_JSON: &str = include_str!("../fixtures/products.json");

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document could not be parsed.
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// Two products share an identifier.
    #[error("duplicate product identifier: {0}")]
    DuplicateProduct(ProductId),
}

/// Product dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dimensions {
    /// Width
    pub width: Decimal,

    /// Height
    pub height: Decimal,

    /// Depth
    pub depth: Decimal,
}

/// Customer review.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Star rating
    pub rating: u8,

    /// Review text
    pub comment: String,

    /// When the review was written
    pub date: Timestamp,

    /// Reviewer display name
    pub reviewer_name: String,

    /// Reviewer contact
    pub reviewer_email: String,
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Display title
    pub title: String,

    /// Long description
    #[serde(default)]
    pub description: String,

    /// Category slug, e.g. `groceries`
    #[serde(default)]
    pub category: String,

    /// Unit price in USD
    pub price: Decimal,

    /// Average rating
    #[serde(default)]
    pub rating: Decimal,

    /// Units in stock
    #[serde(default)]
    pub stock: u32,

    /// Product tags
    #[serde(default)]
    pub tags: SmallVec<[String; 5]>,

    /// Brand, when known
    #[serde(default)]
    pub brand: Option<String>,

    /// Weight in grams
    #[serde(default)]
    pub weight: Option<Decimal>,

    /// Physical dimensions
    #[serde(default)]
    pub dimensions: Option<Dimensions>,

    /// Availability label, e.g. `In Stock`
    #[serde(default)]
    pub availability_status: Option<String>,

    /// Customer reviews
    #[serde(default)]
    pub reviews: Vec<Review>,

    /// Thumbnail image URL
    #[serde(default)]
    pub thumbnail: String,

    /// Gallery image URLs
    #[serde(default)]
    pub images: Vec<String>,
}

/// Wrapper matching the bundled dataset document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
}

/// Catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if two products share an identifier.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
        }

        Ok(Self { products, index })
    }

    /// Parse a catalog document of the form `{"products": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the document is malformed or contains
    /// duplicate identifiers.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;

        Self::new(document.products)
    }

    /// The dataset compiled into the library.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the bundled document is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG_JSON)
    }

    /// Look up a product by identifier.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|position| self.products.get(*position))
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category labels in first-seen order, capitalized for display.
    pub fn categories(&self) -> Vec<String> {
        distinct_labels(
            self.products
                .iter()
                .map(|product| product.category.as_str())
                .filter(|category| !category.is_empty()),
        )
    }

    /// Distinct tag labels in first-seen order, capitalized for display.
    pub fn tags(&self) -> Vec<String> {
        distinct_labels(
            self.products
                .iter()
                .flat_map(|product| product.tags.iter().map(String::as_str)),
        )
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn distinct_labels<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = FxHashSet::default();

    values
        .map(capitalize)
        .filter(|label| seen.insert(label.clone()))
        .collect()
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
