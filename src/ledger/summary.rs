use std::collections::HashMap;

use serde::Serialize;

use crate::currency::{convert, CurrencyCode, RateTable};

use super::transaction::{Transaction, TransactionKind};

/// Lifetime totals in the display currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

/// Accumulates income, expenses, and balance, converting every amount from
/// its recorded currency to `display` first. Empty input yields all zeros.
pub fn summarize(transactions: &[Transaction], display: &CurrencyCode, rates: &RateTable) -> Summary {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    for txn in transactions {
        let amount = convert(txn.amount, &txn.currency, display, rates);
        match txn.kind {
            TransactionKind::Income => total_income += amount,
            TransactionKind::Expense => total_expenses += amount,
        }
    }
    Summary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    }
}

/// Lifetime expense totals per category, converted to `display`. Used by the
/// budget display path, the recommendation rules, and the donut chart data.
pub fn expense_totals_by_category(
    transactions: &[Transaction],
    display: &CurrencyCode,
    rates: &RateTable,
) -> HashMap<String, f64> {
    let mut totals = HashMap::new();
    for txn in transactions {
        if txn.kind != TransactionKind::Expense {
            continue;
        }
        let amount = convert(txn.amount, &txn.currency, display, rates);
        *totals.entry(txn.category.clone()).or_insert(0.0) += amount;
    }
    totals
}
