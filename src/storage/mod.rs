pub mod json_backend;

use crate::ledger::Transaction;

pub type Result<T> = std::result::Result<T, crate::errors::TrackerError>;

/// Abstraction over persistence backends capable of storing ledger snapshots.
///
/// The host calls `save` after every mutating operation and `load` once at
/// startup. Failures surface to the user; there is no automatic retry, and
/// the in-memory store stays authoritative until the next successful save.
pub trait StorageBackend: Send + Sync {
    fn save(&self, transactions: &[Transaction]) -> Result<()>;
    fn load(&self) -> Result<Vec<Transaction>>;
}

pub use json_backend::JsonStorage;
