use super::transaction::Transaction;

/// Category restriction for the transaction table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => name == category,
        }
    }
}

/// Filters by free-text term and category, then sorts newest-first.
///
/// The term matches case-insensitively against description or category; an
/// empty term matches everything. The sort is stable, so same-date entries
/// keep their insertion order. Borrows only, so it is callable repeatedly.
pub fn search<'a>(
    transactions: &'a [Transaction],
    term: &str,
    filter: &CategoryFilter,
) -> Vec<&'a Transaction> {
    let needle = term.to_lowercase();
    let mut hits: Vec<&Transaction> = transactions
        .iter()
        .filter(|txn| {
            let matches_term = needle.is_empty()
                || txn.description.to_lowercase().contains(&needle)
                || txn.category.to_lowercase().contains(&needle);
            matches_term && filter.matches(&txn.category)
        })
        .collect();
    hits.sort_by(|a, b| b.date.cmp(&a.date));
    hits
}
