//! Currency codes, exchange-rate tables, conversion arithmetic, and display
//! formatting.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Fallback rates used when no live source is available.
static DEFAULT_RATES: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    HashMap::from([
        ("USD".to_string(), 1.0),
        ("EUR".to_string(), 0.85),
        ("GBP".to_string(), 0.73),
        ("INR".to_string(), 75.0),
    ])
});

/// Exchange rates anchored on a single base currency.
///
/// Invariant: the base currency is always present with rate 1.0. Refreshes
/// replace the whole mapping, never individual entries, so readers can never
/// observe a partially-updated table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    base: CurrencyCode,
    rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(base: CurrencyCode) -> Self {
        let mut rates = HashMap::new();
        rates.insert(base.as_str().to_string(), 1.0);
        Self { base, rates }
    }

    pub fn with_rates(base: CurrencyCode, rates: HashMap<String, f64>) -> Self {
        let mut table = Self { base, rates };
        table.pin_base();
        table
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Permissive lookup: a currency absent from the table converts at
    /// parity 1.0 rather than erroring.
    pub fn rate_or_parity(&self, code: &CurrencyCode) -> f64 {
        self.rates.get(code.as_str()).copied().unwrap_or(1.0)
    }

    /// One-shot refresh from a rate source, swapping the mapping wholesale.
    /// A failed fetch falls back to the built-in default table.
    pub fn refresh_from(&mut self, source: &dyn RateSource) {
        match source.fetch_rates() {
            Ok(rates) => {
                self.rates = rates;
                self.pin_base();
                tracing::info!(count = self.rates.len(), "exchange rates refreshed");
            }
            Err(err) => {
                tracing::warn!(%err, "rate refresh failed, using default rates");
                self.rates = DEFAULT_RATES.clone();
                self.pin_base();
            }
        }
    }

    fn pin_base(&mut self) {
        self.rates.insert(self.base.as_str().to_string(), 1.0);
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::with_rates(CurrencyCode::default(), DEFAULT_RATES.clone())
    }
}

/// Source of exchange rates, keyed by currency code relative to the base.
pub trait RateSource {
    fn fetch_rates(&self) -> Result<HashMap<String, f64>>;
}

/// Fixed in-memory rate source standing in for a live exchange-rate API.
pub struct StaticRates {
    rates: HashMap<String, f64>,
}

impl StaticRates {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }
}

impl Default for StaticRates {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES.clone(),
        }
    }
}

impl RateSource for StaticRates {
    fn fetch_rates(&self) -> Result<HashMap<String, f64>> {
        Ok(self.rates.clone())
    }
}

/// Converts `amount` from one currency to another through the base currency.
///
/// Same-currency conversions return the amount untouched. Non-finite input
/// yields 0.0 rather than propagating NaN into aggregates.
pub fn convert(amount: f64, from: &CurrencyCode, to: &CurrencyCode, rates: &RateTable) -> f64 {
    if !amount.is_finite() {
        return 0.0;
    }
    if from == to {
        return amount;
    }
    let in_base = amount / rates.rate_or_parity(from);
    in_base * rates.rate_or_parity(to)
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "INR" => "₹".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

/// Renders an amount as an en-US style currency string, e.g. `$1,234.56`.
/// Display only; never feeds back into stored values.
pub fn format_currency(amount: f64, code: &CurrencyCode) -> String {
    let mut body = format!("{:.2}", amount.abs());
    if let Some(pos) = body.find('.') {
        let grouped = group_digits(&body[..pos]);
        body = format!("{}{}", grouped, &body[pos..]);
    }
    let symbol = symbol_for(code.as_str());
    if amount < 0.0 {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
