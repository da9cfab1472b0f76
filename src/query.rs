//! Catalog queries
//!
//! Search, filter and sort over a [`Catalog`]. A query is a linear scan
//! followed by an optional stable sort, so products that compare equal keep
//! their catalog order.

use std::{cmp::Ordering, fmt, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalog::{Catalog, Product};

/// Errors raised while parsing query inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Price bound is not a number.
    #[error("invalid price bound: {0:?}")]
    InvalidPrice(String),

    /// Unknown sort field.
    #[error("unknown sort field {0:?}, expected title, price or rating")]
    UnknownSortField(String),

    /// Unknown sort order.
    #[error("unknown sort order {0:?}, expected asc or desc")]
    UnknownSortOrder(String),
}

/// Field to sort products by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Title, compared case-insensitively
    Title,

    /// Unit price
    Price,

    /// Average rating
    Rating,
}

impl SortField {
    /// Compare two products on this field, ascending.
    pub fn compare(self, left: &Product, right: &Product) -> Ordering {
        match self {
            Self::Title => left
                .title
                .to_lowercase()
                .cmp(&right.title.to_lowercase()),
            Self::Price => left.price.cmp(&right.price),
            Self::Rating => left.rating.cmp(&right.rating),
        }
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" | "name" => Ok(Self::Title),
            "price" => Ok(Self::Price),
            "rating" => Ok(Self::Rating),
            _ => Err(QueryError::UnknownSortField(s.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Title => "title",
            Self::Price => "price",
            Self::Rating => "rating",
        })
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Ascending,

    /// Largest first
    Descending,
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(QueryError::UnknownSortOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        })
    }
}

/// Sort selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    /// Field to compare
    pub field: SortField,

    /// Direction
    pub order: SortOrder,
}

impl Sort {
    /// Compare two products according to this selection.
    pub fn compare(self, left: &Product, right: &Product) -> Ordering {
        let ordering = self.field.compare(left, right);

        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Product search, filter and sort selection.
///
/// Empty or `None` criteria match every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Case-insensitive text matched against title and description
    pub search: String,

    /// Category, compared case-insensitively
    pub category: Option<String>,

    /// Inclusive lower price bound
    pub min_price: Option<Decimal>,

    /// Inclusive upper price bound
    pub max_price: Option<Decimal>,

    /// Tag, compared case-insensitively
    pub tag: Option<String>,

    /// Optional ordering; catalog order otherwise
    pub sort: Option<Sort>,
}

impl ProductQuery {
    /// Check whether `product` satisfies every criterion.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.category.as_deref().is_none_or(|category| {
                category.is_empty() || product.category.eq_ignore_ascii_case(category)
            })
            && self.min_price.is_none_or(|min| product.price >= min)
            && self.max_price.is_none_or(|max| product.price <= max)
            && self.tag.as_deref().is_none_or(|tag| {
                tag.is_empty()
                    || product
                        .tags
                        .iter()
                        .any(|candidate| candidate.eq_ignore_ascii_case(tag))
            })
    }

    fn matches_search(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();

        needle.is_empty()
            || product.title.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    /// Run the query over `catalog`.
    pub fn apply<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Product> {
        let mut products: Vec<&Product> = catalog
            .iter()
            .filter(|product| self.matches(product))
            .collect();

        if let Some(sort) = self.sort {
            products.sort_by(|left, right| sort.compare(left, right));
        }

        products
    }
}

/// Parse a price bound typed by a user; blank input means "no bound".
///
/// # Errors
///
/// Returns a `QueryError` if the text is not a decimal number.
pub fn parse_price_bound(text: &str) -> Result<Option<Decimal>, QueryError> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<Decimal>()
        .map(Some)
        .map_err(|_err| QueryError::InvalidPrice(text.to_string()))
}
