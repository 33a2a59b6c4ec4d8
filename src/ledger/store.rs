use uuid::Uuid;

use crate::errors::{Result, TrackerError};

use super::transaction::{Transaction, TransactionDraft};

/// Sole owner of the ordered transaction list. Collaborators receive
/// read-only slices or derived aggregates, never mutable access.
#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    dirty: bool,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the draft and appends it, returning the minted id.
    pub fn add(&mut self, draft: TransactionDraft) -> Result<Uuid> {
        draft.validate()?;
        let txn = draft.into_transaction();
        let id = txn.id;
        tracing::debug!(%id, category = %txn.category, "transaction added");
        self.transactions.push(txn);
        self.dirty = true;
        Ok(id)
    }

    /// Idempotent removal; returns whether anything was deleted so the UI
    /// can report "not found".
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            tracing::debug!(%id, "transaction removed");
            self.dirty = true;
        }
        removed
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// All transactions in insertion order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Replaces the collection with a persisted snapshot.
    pub fn replace(&mut self, snapshot: Vec<Transaction>) {
        tracing::debug!(count = snapshot.len(), "ledger snapshot loaded");
        self.transactions = snapshot;
        self.dirty = false;
    }

    /// First phase of an edit: removes the original and hands back a
    /// pre-filled draft for the entry form. Committing is a plain `add`;
    /// an abandoned draft loses the original entry.
    pub fn begin_edit(&mut self, id: Uuid) -> Result<TransactionDraft> {
        let index = self
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or(TrackerError::NotFound(id))?;
        let original = self.transactions.remove(index);
        tracing::debug!(%id, "transaction withdrawn for edit");
        self.dirty = true;
        Ok(TransactionDraft::from(original))
    }

    /// True when the collection has mutated since the last snapshot
    /// save/load. The host persists after every mutating operation.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}
