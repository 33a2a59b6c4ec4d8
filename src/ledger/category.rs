//! Fixed category vocabulary, keyed by transaction kind. Not user-extensible.

use super::transaction::TransactionKind;

pub const INCOME_CATEGORIES: [&str; 5] = [
    "Allowance",
    "Part-time Job",
    "Scholarship",
    "Gifts",
    "Other Income",
];

pub const EXPENSE_CATEGORIES: [&str; 10] = [
    "Tuition Fees",
    "Hostel/Rent",
    "Food & Dining",
    "Transportation",
    "Books & Stationery",
    "Electronics",
    "Clothing",
    "Entertainment",
    "Healthcare",
    "Other Expenses",
];

pub fn categories_for(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => &INCOME_CATEGORIES,
        TransactionKind::Expense => &EXPENSE_CATEGORIES,
    }
}

pub fn is_known(kind: TransactionKind, name: &str) -> bool {
    categories_for(kind).contains(&name)
}
