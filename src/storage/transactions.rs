//! Transaction persistence
//!
//! The ledger is stored as a single pretty-printed JSON array in
//! `transactions.json`, rewritten in full on every save.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::TrackerResult;
use crate::models::Transaction;

use super::file_io::{read_json, write_json_atomic};

/// Load/save collaborator for the ledger
///
/// Implementations may fail with I/O errors; the tracker treats those as
/// non-fatal.
pub trait TransactionStore: Send {
    /// Load the full ordered sequence of transactions
    fn load(&self) -> TrackerResult<Vec<Transaction>>;

    /// Replace the stored sequence with `transactions`
    fn save(&self, transactions: &[Transaction]) -> TrackerResult<()>;
}

/// JSON file backed transaction store
#[derive(Debug, Clone)]
pub struct JsonTransactionStore {
    path: PathBuf,
}

impl JsonTransactionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionStore for JsonTransactionStore {
    fn load(&self) -> TrackerResult<Vec<Transaction>> {
        match read_json::<Vec<Transaction>, _>(&self.path)? {
            Some(transactions) => {
                debug!(
                    path = %self.path.display(),
                    count = transactions.len(),
                    "loaded transactions"
                );
                Ok(transactions)
            }
            None => {
                // Absent or blank file: start empty and (re)create it
                if let Err(e) = self.save(&[]) {
                    warn!(path = %self.path.display(), error = %e, "could not create transaction file");
                }
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, transactions: &[Transaction]) -> TrackerResult<()> {
        write_json_atomic(&self.path, transactions)?;
        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "saved transactions"
        );
        Ok(())
    }
}
