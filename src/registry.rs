// Static currency -> country/region table
use crate::error::{MacroIndexError, Result};
use std::collections::HashMap;

/// Major currencies and the country/region whose indicators back them.
/// Declaration order is the order `codes()`/`countries()` iterate in.
const CURRENCY_COUNTRY_TABLE: [(&str, &str); 24] = [
    ("USD", "United States"),
    ("EUR", "Euro Area"),
    ("GBP", "United Kingdom"),
    ("JPY", "Japan"),
    ("CHF", "Switzerland"),
    ("CAD", "Canada"),
    ("AUD", "Australia"),
    ("NZD", "New Zealand"),
    ("SEK", "Sweden"),
    ("NOK", "Norway"),
    ("DKK", "Denmark"),
    ("PLN", "Poland"),
    ("CZK", "Czech Republic"),
    ("HUF", "Hungary"),
    ("SGD", "Singapore"),
    ("HKD", "Hong Kong"),
    ("KRW", "South Korea"),
    ("CNY", "China"),
    ("INR", "India"),
    ("BRL", "Brazil"),
    ("MXN", "Mexico"),
    ("ZAR", "South Africa"),
    ("RUB", "Russia"),
    ("TRY", "Turkey"),
];

/// Immutable currency-code -> country mapping, built once at startup and
/// shared read-only across requests.
pub struct CurrencyRegistry {
    entries: Vec<(String, String)>,
    by_code: HashMap<String, String>,
}

impl CurrencyRegistry {
    /// Registry over the built-in major-currency table
    pub fn new() -> Self {
        Self::from_entries(
            CURRENCY_COUNTRY_TABLE
                .iter()
                .map(|(code, country)| (code.to_string(), country.to_string())),
        )
    }

    /// Registry over an arbitrary table; codes are normalized to uppercase.
    /// Used by tests to substitute a smaller mapping.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let entries: Vec<(String, String)> = entries
            .into_iter()
            .map(|(code, country)| (code.to_uppercase(), country))
            .collect();
        let by_code = entries.iter().cloned().collect();
        Self { entries, by_code }
    }

    /// Case-insensitive lookup of the country backing a currency code.
    ///
    /// Fails with `UnknownCurrency` when the code is not in the table; the
    /// caller surfaces that as a client error.
    pub fn resolve(&self, code: &str) -> Result<&str> {
        self.by_code
            .get(&code.to_uppercase())
            .map(String::as_str)
            .ok_or_else(|| MacroIndexError::UnknownCurrency(code.to_uppercase()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, country)| country.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
