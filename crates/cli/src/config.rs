//! Command-line configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use storefront::{
    cart::ProductId,
    query::{ProductQuery, Sort, SortField, SortOrder},
};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Browse the catalog and manage a cart kept in a local file.
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront catalog and cart", long_about = None)]
pub struct CliConfig {
    /// File holding the persisted cart slot
    #[arg(long, env = "STOREFRONT_CART_FILE", default_value = ".storefront/cart.json", global = true)]
    pub cart_file: PathBuf,

    /// Catalog JSON to use instead of the bundled products
    #[arg(long, env = "STOREFRONT_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Action to run.
    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // A missing .env file is fine.
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Storefront actions.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List products, optionally searched, filtered and sorted
    Products(ProductsArgs),

    /// Show one product with its reviews
    Show {
        /// Product id
        id: ProductId,
    },

    /// Show the cart contents and total
    Cart,

    /// Add one unit of a product to the cart
    Add {
        /// Product id
        id: ProductId,
    },

    /// Remove one unit of a product from the cart
    Remove {
        /// Product id
        id: ProductId,
    },

    /// Empty the cart
    Clear,

    /// Complete the purchase and empty the cart
    Checkout,
}

/// Product listing criteria.
#[derive(Debug, Default, Args)]
pub struct ProductsArgs {
    /// Text matched against title and description
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only products in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Inclusive lower price bound
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Inclusive upper price bound
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// Only products carrying this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Sort field (title, price, rating)
    #[arg(long)]
    pub sort: Option<SortField>,

    /// Sort order (asc, desc)
    #[arg(long, default_value_t = SortOrder::Ascending)]
    pub order: SortOrder,
}

impl ProductsArgs {
    /// Build the catalog query these arguments describe.
    pub fn to_query(&self) -> ProductQuery {
        ProductQuery {
            search: self.search.clone(),
            category: self.category.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            tag: self.tag.clone(),
            sort: self.sort.map(|field| Sort {
                field,
                order: self.order,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn products_flags_build_query() -> TestResult {
        let config = CliConfig::try_parse_from([
            "storefront",
            "products",
            "--category",
            "groceries",
            "--max-price",
            "5",
            "--sort",
            "price",
            "--order",
            "desc",
        ])?;

        let Command::Products(args) = config.command else {
            return Err("expected products command".into());
        };

        let query = args.to_query();

        assert_eq!(query.category.as_deref(), Some("groceries"));
        assert_eq!(query.max_price, Some(Decimal::new(5, 0)));
        assert_eq!(
            query.sort,
            Some(Sort {
                field: SortField::Price,
                order: SortOrder::Descending,
            })
        );

        Ok(())
    }

    #[test]
    fn order_without_sort_field_is_ignored() {
        let args = ProductsArgs {
            order: SortOrder::Descending,
            ..ProductsArgs::default()
        };

        assert_eq!(args.to_query().sort, None);
    }

    #[test]
    fn cart_file_flag_overrides_default() -> TestResult {
        let config =
            CliConfig::try_parse_from(["storefront", "add", "16", "--cart-file", "/tmp/cart.json"])?;

        assert_eq!(config.cart_file, PathBuf::from("/tmp/cart.json"));
        assert!(matches!(config.command, Command::Add { id: 16 }));

        Ok(())
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let result = CliConfig::try_parse_from(["storefront", "products", "--sort", "weight"]);

        assert!(result.is_err());
    }
}
