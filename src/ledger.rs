//! Reconciliation ledger: the durable card-id to message-id correlation
//! table.
//!
//! Stored as a two-column CSV file with a header row. The whole table is
//! read into memory, mutated there, and written back in one atomic
//! replace (temp file + rename), so an interrupted run leaves the
//! previous valid state on disk. Rows appended by a crashed run persist
//! until a later sweep resolves them: reconciliation is at-least-once.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LedgerError;

const HEADER: &str = "card_id,message_id";

/// One correlation between a published card and its source message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    pub card_id: String,
    pub message_id: String,
}

/// In-memory working copy of the ledger file.
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    rows: Vec<LedgerRow>,
}

impl Ledger {
    /// Load the ledger from disk. A missing file is an empty ledger.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self { path, rows: Vec::new() });
            }
            Err(e) => return Err(e.into()),
        };

        let mut rows = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if index == 0 || line.trim().is_empty() {
                continue;
            }
            let (card_id, message_id) =
                line.split_once(',').ok_or_else(|| LedgerError::Malformed {
                    line: index + 1,
                    reason: "expected two comma-separated columns".to_string(),
                })?;
            rows.push(LedgerRow {
                card_id: card_id.trim().to_string(),
                message_id: message_id.trim().to_string(),
            });
        }

        debug!(path = %path.display(), rows = rows.len(), "loaded ledger");
        Ok(Self { path, rows })
    }

    /// Append a row. Card ids are unique across active rows: re-appending
    /// the identical pair is a no-op (a crashed run may replay an append),
    /// while a conflicting pair for a known card is rejected.
    pub fn append(&mut self, row: LedgerRow) -> Result<(), LedgerError> {
        if let Some(existing) = self.lookup_by_card(&row.card_id) {
            if existing == row.message_id {
                return Ok(());
            }
            return Err(LedgerError::DuplicateCard {
                card_id: row.card_id,
                existing: existing.to_string(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Source message id for a card, if the card was published by this tool.
    pub fn lookup_by_card(&self, card_id: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.card_id == card_id)
            .map(|row| row.message_id.as_str())
    }

    /// Drop the row for a card from the working copy. Returns whether a
    /// row was present. Takes effect on disk at the next [`persist`].
    ///
    /// [`persist`]: Ledger::persist
    pub fn remove(&mut self, card_id: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.card_id != card_id);
        before != self.rows.len()
    }

    /// Write the working copy back to disk atomically.
    pub fn persist(&self) -> Result<(), LedgerError> {
        let tmp_path = self.path.with_extension("tmp");
        {
            let mut file = fs::File::create(&tmp_path)?;
            writeln!(file, "{HEADER}")?;
            for row in &self.rows {
                writeln!(file, "{},{}", row.card_id, row.message_id)?;
            }
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        debug!(path = %self.path.display(), rows = self.rows.len(), "persisted ledger");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
