//! Derived analytics: month buckets, forecasting, and recommendations.

pub mod forecast;
pub mod recommend;
pub mod timeseries;

pub use forecast::predict_next_month;
pub use recommend::{recommend, AdviceTag, Recommendation};
pub use timeseries::{monthly_totals, top_expense_categories, CategoryTotal, MonthBucket};
