//! Error types shared by the persistence and synchronization layers.
//!
//! Every failure surfaced by the report store, the client registry, the
//! backup codec and the remote sync client is classified into one of four
//! kinds. Commands convert these into user-facing messages; nothing in this
//! crate retries on its own.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Malformed input: an empty task list, a non-positive task time or a
    /// backup document whose top-level shape is not a sequence of reports.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A read or write against the report store failed.
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// A client registry upsert against the remote store failed. The batch
    /// is all-or-nothing from the caller's point of view.
    #[error("sync failure: {0}")]
    Sync(String),

    /// The connectivity probe could not reach the remote store. Non-fatal;
    /// callers downgrade this to a status flag.
    #[error("connectivity failure: {0}")]
    Connectivity(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Persistence(err.to_string())
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Validation(err.to_string())
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Sync(err.to_string())
    }
}
