#![doc(test(attr(deny(warnings))))]

//! Fintrack Core offers the ledger, currency, and analytics primitives that
//! power a student-oriented personal finance tracker UI.

pub mod analytics;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}
