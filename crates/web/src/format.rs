//! Display formatting for prices and catalog values.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};

/// Format a dollar amount with the currency's symbol, separators and cents.
pub fn format_usd(amount: Decimal) -> String {
    Money::from_decimal(amount, iso::USD).to_string()
}

/// Format an optional measurement, using `-` when missing.
pub fn format_measure(value: Option<Decimal>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.normalize().to_string())
}
