//! Next-month expense prediction.

use chrono::NaiveDate;

use crate::currency::{CurrencyCode, RateTable};
use crate::ledger::{Transaction, TransactionKind};

use super::timeseries::monthly_totals;

const TREND_WINDOW_MONTHS: usize = 3;

/// Predicts next month's expense total in the display currency.
///
/// Trailing average of the last three calendar months plus a linear trend
/// adjustment (`(last - first) / bucket_count`), floored at zero. A ledger
/// with no transactions at all predicts 0. Intentionally a naive heuristic;
/// no confidence intervals, no seasonality.
pub fn predict_next_month(
    transactions: &[Transaction],
    reference: NaiveDate,
    display: &CurrencyCode,
    rates: &RateTable,
) -> f64 {
    if transactions.is_empty() {
        return 0.0;
    }
    let buckets = monthly_totals(
        transactions,
        Some(TransactionKind::Expense),
        TREND_WINDOW_MONTHS,
        reference,
        display,
        rates,
    );
    let mean = buckets.iter().map(|bucket| bucket.total).sum::<f64>() / buckets.len() as f64;
    let mut prediction = mean;
    if buckets.len() >= 2 {
        let trend = buckets[buckets.len() - 1].total - buckets[0].total;
        prediction += trend / buckets.len() as f64;
    }
    prediction.max(0.0)
}
