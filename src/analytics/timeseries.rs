//! Calendar-month bucketing for charts and forecasting.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::currency::{convert, CurrencyCode, RateTable};
use crate::ledger::{expense_totals_by_category, Transaction, TransactionKind};

/// One calendar month of the trailing window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub total: f64,
}

/// Buckets transactions into the trailing `window_months` calendar months
/// ending at `reference`'s month, oldest first.
///
/// Exactly `window_months` buckets come back regardless of data sparsity;
/// empty months carry total 0. Transactions outside the window are ignored,
/// and amounts are converted to `display` before summing. `kind` of `None`
/// aggregates income and expenses together.
pub fn monthly_totals(
    transactions: &[Transaction],
    kind: Option<TransactionKind>,
    window_months: usize,
    reference: NaiveDate,
    display: &CurrencyCode,
    rates: &RateTable,
) -> Vec<MonthBucket> {
    let months = trailing_months(reference, window_months);
    let mut totals = vec![0.0; months.len()];
    for txn in transactions {
        if let Some(wanted) = kind {
            if txn.kind != wanted {
                continue;
            }
        }
        let key = (txn.date.year(), txn.date.month());
        if let Some(index) = months.iter().position(|month| *month == key) {
            totals[index] += convert(txn.amount, &txn.currency, display, rates);
        }
    }
    months
        .into_iter()
        .zip(totals)
        .map(|((year, month), total)| MonthBucket {
            year,
            month,
            label: format!("{} {}", month_label(month), year),
            total,
        })
        .collect()
}

/// (year, month) pairs for the trailing window, oldest first.
fn trailing_months(reference: NaiveDate, window_months: usize) -> Vec<(i32, u32)> {
    let mut months = Vec::with_capacity(window_months);
    let mut year = reference.year();
    let mut month = reference.month() as i32;
    for _ in 0..window_months {
        months.push((year, month as u32));
        month -= 1;
        if month == 0 {
            month = 12;
            year -= 1;
        }
    }
    months.reverse();
    months
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

/// A ranked slice of the expense breakdown, for the category donut chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Lifetime expense totals ranked largest-first, truncated to `limit`
/// entries. Ties break alphabetically so the ranking is deterministic.
pub fn top_expense_categories(
    transactions: &[Transaction],
    limit: usize,
    display: &CurrencyCode,
    rates: &RateTable,
) -> Vec<CategoryTotal> {
    let mut ranked: Vec<CategoryTotal> = expense_totals_by_category(transactions, display, rates)
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();
    ranked.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionDraft;

    fn expense(category: &str, amount: f64, date: (i32, u32, u32)) -> Transaction {
        TransactionDraft::new(
            TransactionKind::Expense,
            category,
            amount,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            CurrencyCode::default(),
        )
        .into_transaction()
    }

    fn income(amount: f64, date: (i32, u32, u32)) -> Transaction {
        TransactionDraft::new(
            TransactionKind::Income,
            "Allowance",
            amount,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            CurrencyCode::default(),
        )
        .into_transaction()
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn window_always_has_exactly_n_buckets() {
        let usd = CurrencyCode::default();
        let rates = RateTable::default();
        let buckets = monthly_totals(&[], None, 6, reference(), &usd, &rates);
        assert_eq!(buckets.len(), 6);
        assert!(buckets.iter().all(|bucket| bucket.total == 0.0));
        assert_eq!(buckets[0].label, "Oct 2023");
        assert_eq!(buckets[5].label, "Mar 2024");
    }

    #[test]
    fn window_crosses_year_boundary() {
        let usd = CurrencyCode::default();
        let rates = RateTable::default();
        let jan = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let buckets = monthly_totals(&[], None, 3, jan, &usd, &rates);
        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Nov 2023", "Dec 2023", "Jan 2024"]);
    }

    #[test]
    fn totals_land_in_matching_buckets_and_filter_by_kind() {
        let usd = CurrencyCode::default();
        let rates = RateTable::default();
        let transactions = vec![
            expense("Food & Dining", 100.0, (2024, 1, 5)),
            expense("Food & Dining", 50.0, (2024, 3, 1)),
            income(400.0, (2024, 3, 2)),
            // outside the window, ignored
            expense("Clothing", 999.0, (2023, 11, 30)),
        ];
        let buckets = monthly_totals(
            &transactions,
            Some(TransactionKind::Expense),
            3,
            reference(),
            &usd,
            &rates,
        );
        assert_eq!(buckets[0].total, 100.0); // Jan
        assert_eq!(buckets[1].total, 0.0); // Feb
        assert_eq!(buckets[2].total, 50.0); // Mar

        let combined = monthly_totals(&transactions, None, 3, reference(), &usd, &rates);
        assert_eq!(combined[2].total, 450.0);
    }

    #[test]
    fn top_categories_rank_descending_and_truncate() {
        let usd = CurrencyCode::default();
        let rates = RateTable::default();
        let transactions = vec![
            expense("Food & Dining", 120.0, (2024, 2, 1)),
            expense("Entertainment", 80.0, (2024, 2, 2)),
            expense("Clothing", 200.0, (2024, 2, 3)),
        ];
        let ranked = top_expense_categories(&transactions, 2, &usd, &rates);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].category, "Clothing");
        assert_eq!(ranked[1].category, "Food & Dining");
    }
}
