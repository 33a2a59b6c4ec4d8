use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::CurrencyCode;
use crate::errors::{Result, TrackerError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single ledger entry. Immutable once stored; an edit is modeled as
/// delete-then-recreate via [`TransactionDraft`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    /// Recording currency, fixed at creation. Aggregates convert on the fly;
    /// stored amounts are never rewritten.
    pub currency: CurrencyCode,
}

/// A pending entry: either fresh user input or the pre-filled result of
/// `begin_edit`. Validation happens here, before anything reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub currency: CurrencyCode,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        currency: CurrencyCode,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
            date,
            description: String::new(),
            currency,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Rejects non-finite and non-positive amounts before they reach the
    /// store. Amounts are not re-validated after this point.
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(TrackerError::InvalidAmount(format!(
                "amount must be a positive number, got {}",
                self.amount
            )));
        }
        Ok(())
    }

    pub(crate) fn into_transaction(self) -> Transaction {
        let description = if self.description.trim().is_empty() {
            self.category.clone()
        } else {
            self.description
        };
        Transaction {
            id: Uuid::new_v4(),
            kind: self.kind,
            category: self.category,
            amount: self.amount,
            date: self.date,
            description,
            currency: self.currency,
        }
    }
}

impl From<Transaction> for TransactionDraft {
    fn from(txn: Transaction) -> Self {
        Self {
            kind: txn.kind,
            category: txn.category,
            amount: txn.amount,
            date: txn.date,
            description: txn.description,
            currency: txn.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(amount: f64) -> TransactionDraft {
        TransactionDraft::new(
            TransactionKind::Expense,
            "Food & Dining",
            amount,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            CurrencyCode::default(),
        )
    }

    #[test]
    fn rejects_non_positive_amounts() {
        assert!(draft(0.0).validate().is_err());
        assert!(draft(-5.0).validate().is_err());
        assert!(draft(f64::NAN).validate().is_err());
        assert!(draft(10.0).validate().is_ok());
    }

    #[test]
    fn blank_description_defaults_to_category() {
        let txn = draft(25.0).into_transaction();
        assert_eq!(txn.description, "Food & Dining");

        let txn = draft(25.0).with_description("lunch").into_transaction();
        assert_eq!(txn.description, "lunch");
    }
}
