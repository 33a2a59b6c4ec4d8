//! End-to-end flow across the store, query, summary, budget, and analytics
//! services, mirroring how a tracker UI drives the core.

use chrono::NaiveDate;

use fintrack_core::analytics::{
    monthly_totals, predict_next_month, recommend, top_expense_categories, AdviceTag,
};
use fintrack_core::currency::{CurrencyCode, RateTable};
use fintrack_core::ledger::{
    budget, search, summarize, CategoryFilter, TransactionDraft, TransactionKind, TransactionStore,
};

fn usd() -> CurrencyCode {
    CurrencyCode::default()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The worked example: 1000 income, 350 + 50 food spend, base currency.
fn example_store() -> TransactionStore {
    let mut store = TransactionStore::new();
    store
        .add(TransactionDraft::new(
            TransactionKind::Income,
            "Allowance",
            1000.0,
            date(2024, 1, 5),
            usd(),
        ))
        .unwrap();
    store
        .add(TransactionDraft::new(
            TransactionKind::Expense,
            "Food & Dining",
            350.0,
            date(2024, 1, 10),
            usd(),
        ))
        .unwrap();
    store
        .add(TransactionDraft::new(
            TransactionKind::Expense,
            "Food & Dining",
            50.0,
            date(2024, 2, 10),
            usd(),
        ))
        .unwrap();
    store
}

#[test]
fn worked_example_summary_adds_up() {
    let store = example_store();
    let summary = summarize(store.all(), &usd(), &RateTable::default());
    assert_eq!(summary.total_income, 1000.0);
    assert_eq!(summary.total_expenses, 400.0);
    assert_eq!(summary.balance, 600.0);
}

#[test]
fn worked_example_triggers_budget_and_meal_recommendations() {
    let store = example_store();
    let recommendations = recommend(store.all(), date(2024, 2, 15), &usd(), &RateTable::default());
    let tags: Vec<AdviceTag> = recommendations.iter().map(|r| r.tag).collect();
    assert!(tags.contains(&AdviceTag::BudgetExceeded));
    assert!(tags.contains(&AdviceTag::Meals));
}

#[test]
fn flagging_recorded_transactions_uses_the_same_predicate_as_entry() {
    let store = example_store();
    let rates = RateTable::default();
    // per-transaction display flag: 350 alone exceeds the 300 food limit
    let flagged: Vec<bool> = store
        .all()
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| !budget::within_limit(&t.category, t.amount, &t.currency, &rates))
        .collect();
    assert_eq!(flagged, [true, false]);
}

#[test]
fn query_then_requery_is_stable() {
    let store = example_store();
    let all = search(store.all(), "", &CategoryFilter::All);
    assert_eq!(all.len(), 3);
    // date-descending
    assert_eq!(all[0].date, date(2024, 2, 10));

    let food = search(store.all(), "food", &CategoryFilter::All);
    assert_eq!(food.len(), 2);

    let filtered = search(
        store.all(),
        "",
        &CategoryFilter::Only("Allowance".to_string()),
    );
    assert_eq!(filtered.len(), 1);
}

#[test]
fn edit_round_trip_recreates_the_entry() {
    let mut store = example_store();
    let target = search(store.all(), "", &CategoryFilter::Only("Allowance".into()))[0].id;

    let mut draft = store.begin_edit(target).expect("draft");
    assert_eq!(store.len(), 2, "original is withdrawn during the edit");
    draft.amount = 1200.0;
    store.add(draft).expect("commit edit");

    let summary = summarize(store.all(), &usd(), &RateTable::default());
    assert_eq!(summary.total_income, 1200.0);
}

#[test]
fn chart_feeds_are_plain_data() {
    let store = example_store();
    let rates = RateTable::default();
    let reference = date(2024, 2, 15);

    let income = monthly_totals(
        store.all(),
        Some(TransactionKind::Income),
        6,
        reference,
        &usd(),
        &rates,
    );
    let expenses = monthly_totals(
        store.all(),
        Some(TransactionKind::Expense),
        6,
        reference,
        &usd(),
        &rates,
    );
    assert_eq!(income.len(), 6);
    assert_eq!(expenses.len(), 6);
    assert_eq!(income[4].total, 1000.0); // Jan 2024
    assert_eq!(expenses[4].total, 350.0);
    assert_eq!(expenses[5].total, 50.0);

    let ranked = top_expense_categories(store.all(), 10, &usd(), &rates);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].category, "Food & Dining");
    assert_eq!(ranked[0].total, 400.0);
}

#[test]
fn forecast_follows_the_trailing_window() {
    let store = example_store();
    // window Dec/Jan/Feb: totals 0, 350, 50 → mean 133.33, trend (50-0)/3
    let prediction = predict_next_month(store.all(), date(2024, 2, 15), &usd(), &RateTable::default());
    let expected = (0.0 + 350.0 + 50.0) / 3.0 + (50.0 - 0.0) / 3.0;
    assert!((prediction - expected).abs() < 1e-9, "got {prediction}");
    assert!(prediction >= 0.0);
}

#[test]
fn empty_ledger_predicts_nothing_and_prompts_tracking() {
    let store = TransactionStore::new();
    let rates = RateTable::default();
    let reference = date(2024, 2, 15);

    assert_eq!(predict_next_month(store.all(), reference, &usd(), &rates), 0.0);

    let recommendations = recommend(store.all(), reference, &usd(), &rates);
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].tag, AdviceTag::Info);
    assert!(recommendations[0].message.contains("Start tracking"));
}

#[test]
fn mixed_currency_ledger_summarizes_in_display_currency() {
    let mut store = TransactionStore::new();
    let rates = RateTable::default();
    store
        .add(TransactionDraft::new(
            TransactionKind::Income,
            "Part-time Job",
            85.0,
            date(2024, 3, 1),
            CurrencyCode::new("EUR"),
        ))
        .unwrap();
    store
        .add(TransactionDraft::new(
            TransactionKind::Expense,
            "Transportation",
            73.0,
            date(2024, 3, 2),
            CurrencyCode::new("GBP"),
        ))
        .unwrap();

    // 85 EUR = 100 USD, 73 GBP = 100 USD
    let summary = summarize(store.all(), &usd(), &rates);
    assert!((summary.total_income - 100.0).abs() < 1e-9);
    assert!((summary.total_expenses - 100.0).abs() < 1e-9);
    assert!(summary.balance.abs() < 1e-9);

    // and in EUR the same ledger shows converted figures
    let summary_eur = summarize(store.all(), &CurrencyCode::new("EUR"), &rates);
    assert!((summary_eur.total_income - 85.0).abs() < 1e-9);
}
