//! Rule-driven budgeting advice derived from aggregated spending statistics.

use chrono::NaiveDate;
use serde::Serialize;

use crate::currency::{convert, format_currency, CurrencyCode, RateTable};
use crate::ledger::{
    budget::limit_for, expense_totals_by_category, summarize, Transaction, TransactionKind,
    EXPENSE_CATEGORIES,
};

use super::timeseries::monthly_totals;

const VARIABILITY_WINDOW_MONTHS: usize = 3;
const VARIABILITY_THRESHOLD_PERCENT: f64 = 30.0;

/// Severity/icon tag for a recommendation, for the host UI to style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AdviceTag {
    Info,
    BudgetExceeded,
    Overspending,
    SavingsNudge,
    Praise,
    IrregularSpending,
    Textbooks,
    Meals,
    Entertainment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub tag: AdviceTag,
    pub message: String,
}

fn advice(tag: AdviceTag, message: impl Into<String>) -> Recommendation {
    Recommendation {
        tag,
        message: message.into(),
    }
}

/// Evaluates the advice rules in fixed order; every matching rule appends
/// one recommendation. Amounts in messages are rendered in the display
/// currency, comparisons happen in the base currency.
pub fn recommend(
    transactions: &[Transaction],
    reference: NaiveDate,
    display: &CurrencyCode,
    rates: &RateTable,
) -> Vec<Recommendation> {
    if transactions.is_empty() {
        return vec![advice(
            AdviceTag::Info,
            "Start tracking your expenses to get personalized recommendations",
        )];
    }

    let mut recommendations = Vec::new();
    let base = rates.base().clone();
    let spend_by_category = expense_totals_by_category(transactions, &base, rates);

    // Rule: lifetime spend vs. configured limit, in vocabulary order.
    for category in EXPENSE_CATEGORIES {
        let (Some(limit), Some(&spent)) = (limit_for(category), spend_by_category.get(category))
        else {
            continue;
        };
        if spent > limit {
            let spent_display = format_currency(convert(spent, &base, display, rates), display);
            let limit_display = format_currency(convert(limit, &base, display, rates), display);
            recommendations.push(advice(
                AdviceTag::BudgetExceeded,
                format!(
                    "Your {category} expenses ({spent_display}) exceed the recommended budget \
                     of {limit_display}. Consider reducing spending in this category."
                ),
            ));
        }
    }

    // Rule: savings rate over lifetime totals. Zero income skips the rule
    // rather than dividing by zero. The [10, 20) band stays silent, matching
    // the observed behavior.
    let summary = summarize(transactions, &base, rates);
    if summary.total_income > 0.0 {
        let savings_rate =
            (summary.total_income - summary.total_expenses) / summary.total_income * 100.0;
        if savings_rate < 0.0 {
            recommendations.push(advice(
                AdviceTag::Overspending,
                "You are spending more than you earn. Consider reducing expenses or finding \
                 additional income sources like part-time work or scholarships.",
            ));
        } else if savings_rate < 10.0 {
            recommendations.push(advice(
                AdviceTag::SavingsNudge,
                format!(
                    "Your savings rate is {savings_rate:.1}%. Try to save at least 20% of your \
                     income for emergencies and future expenses."
                ),
            ));
        } else if savings_rate >= 20.0 {
            recommendations.push(advice(
                AdviceTag::Praise,
                format!(
                    "Great job! Your savings rate is {savings_rate:.1}%, which is above the \
                     recommended 20%. Keep up the good work!"
                ),
            ));
        }
    }

    // Rule: month-to-month variability. Zero mean skips the rule.
    let buckets = monthly_totals(
        transactions,
        Some(TransactionKind::Expense),
        VARIABILITY_WINDOW_MONTHS,
        reference,
        display,
        rates,
    );
    let mean = buckets.iter().map(|bucket| bucket.total).sum::<f64>() / buckets.len() as f64;
    if mean > 0.0 {
        let variance = buckets
            .iter()
            .map(|bucket| (bucket.total - mean).powi(2))
            .sum::<f64>()
            / buckets.len() as f64;
        let coefficient_of_variation = variance.sqrt() / mean * 100.0;
        if coefficient_of_variation > VARIABILITY_THRESHOLD_PERCENT {
            recommendations.push(advice(
                AdviceTag::IrregularSpending,
                "Your spending varies significantly from month to month. Try to maintain a \
                 more consistent budget to better manage your finances.",
            ));
        }
    }

    // Rule: student-specific category thresholds, lifetime base-currency spend.
    let student_thresholds: [(&str, f64, AdviceTag, &str); 3] = [
        (
            "Books & Stationery",
            200.0,
            AdviceTag::Textbooks,
            "Consider buying used textbooks or sharing with classmates to reduce book expenses.",
        ),
        (
            "Food & Dining",
            300.0,
            AdviceTag::Meals,
            "Try cooking meals at home and using student meal plans to save on food expenses.",
        ),
        (
            "Entertainment",
            100.0,
            AdviceTag::Entertainment,
            "Look for student discounts and free campus events for entertainment.",
        ),
    ];
    for (category, threshold, tag, message) in student_thresholds {
        if spend_by_category.get(category).copied().unwrap_or(0.0) > threshold {
            recommendations.push(advice(tag, message));
        }
    }

    if recommendations.is_empty() {
        recommendations.push(advice(
            AdviceTag::Praise,
            "Your spending patterns look good! Keep up the good work with your budgeting.",
        ));
    }
    recommendations
}
