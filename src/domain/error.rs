// src/domain/error.rs
use thiserror::Error;

/// Failure reported by a cache or service collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("SQLite error")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
    #[error("Blocking store task failed")]
    Task(#[from] tokio::task::JoinError),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Repository-level failure; the collaborator error is only reachable
/// through `source()`.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Failed to read notes from cache")]
    CacheRead(#[source] StoreError),
    #[error("Failed to write notes to cache")]
    CacheWrite(#[source] StoreError),
    #[error("Failed to read notes from service")]
    ServiceRead(#[source] StoreError),
    #[error("Failed to write notes to service")]
    ServiceWrite(#[source] StoreError),
}

impl DomainError {
    /// One line with this error and every underlying cause, joined by ": "
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
