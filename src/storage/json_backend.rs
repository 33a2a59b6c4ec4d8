use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    ledger::Transaction,
    utils::{ensure_dir, write_atomic},
};

use super::{Result, StorageBackend};

const SNAPSHOT_FILE: &str = "transactions.json";

/// Stores the full transaction list as one pretty-printed JSON snapshot,
/// written atomically (tmp file + rename).
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(default_root);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(SNAPSHOT_FILE)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }
}

fn default_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fintrack")
}

impl StorageBackend for JsonStorage {
    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let json = serde_json::to_string_pretty(transactions)?;
        write_atomic(&self.snapshot_path(), &json)?;
        tracing::debug!(count = transactions.len(), "ledger snapshot saved");
        Ok(())
    }

    /// A missing snapshot file means a fresh ledger, not an error.
    fn load(&self) -> Result<Vec<Transaction>> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
