//! Display helpers shared by listing components.

use crate::money::{Currency, Money};

/// Format a price given in cents for a listing. Fractional cents round to
/// the nearest cent.
pub fn format_price(cents: f64, currency: Currency) -> String {
    Money::new(cents.round() as i64, currency).display_compact()
}

/// Prefix `word` with `count`, adding an "s" unless the count is exactly one.
///
/// ```
/// use sole_card::format::pluralize;
/// assert_eq!(pluralize("Color", 1), "1 Color");
/// assert_eq!(pluralize("Color", 3), "3 Colors");
/// ```
pub fn pluralize(word: &str, count: i64) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{} {}{}", count, word, suffix)
}
