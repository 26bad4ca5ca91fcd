//! Price formatting using decimal arithmetic.
//!
//! Prices are plain [`Decimal`] amounts in USD. All user-visible money
//! (catalog pages, cart lines, the WhatsApp order message) goes through
//! [`usd`] so the rendering is uniform: dollar sign, two decimal places.

use rust_decimal::Decimal;

/// Format a decimal amount as a USD price string (e.g., `$19.99`).
///
/// The amount is rescaled to exactly two decimal places, so whole-dollar
/// amounts render as `$40.00`, not `$40`.
#[must_use]
pub fn usd(amount: Decimal) -> String {
    let mut amount = amount;
    amount.rescale(2);
    format!("${amount}")
}
