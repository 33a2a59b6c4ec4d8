//! Per-category spending guardrails, expressed in the base currency.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::currency::{convert, CurrencyCode, RateTable};

/// Recommended limits per expense category, in base-currency units. Static
/// configuration, not user-editable.
static BUDGET_LIMITS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("Tuition Fees", 1000.0),
        ("Hostel/Rent", 500.0),
        ("Food & Dining", 300.0),
        ("Transportation", 100.0),
        ("Books & Stationery", 200.0),
        ("Electronics", 300.0),
        ("Clothing", 150.0),
        ("Entertainment", 100.0),
        ("Healthcare", 100.0),
        ("Other Expenses", 200.0),
    ])
});

/// Sentinel lookup so the host can render the limit in a confirmation
/// prompt. `None` means the category is unconstrained.
pub fn limit_for(category: &str) -> Option<f64> {
    BUDGET_LIMITS.get(category).copied()
}

/// Soft budget gate shared by the pre-submission check and the post-hoc
/// display flag. Converts the amount to the base currency first; the
/// comparison is inclusive, so an amount exactly at the limit passes.
/// Categories without a configured limit always pass.
pub fn within_limit(
    category: &str,
    amount: f64,
    amount_currency: &CurrencyCode,
    rates: &RateTable,
) -> bool {
    match limit_for(category) {
        None => true,
        Some(limit) => convert(amount, amount_currency, rates.base(), rates) <= limit,
    }
}
