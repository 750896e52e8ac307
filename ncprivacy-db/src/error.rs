use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by database resolution, filtering and the query engines.
#[derive(Debug, Error)]
pub enum DbError {
    /// The platform lookup failed or the resolved file does not exist
    #[error("Notification database not found: {0}")]
    PathNotFound(String),

    /// The file exists but SQLite refused to open it in the requested mode
    #[error("Failed to open database {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A caller-supplied argument (date range, pattern) is unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl DbError {
    pub fn path_not_found(msg: impl Into<String>) -> Self {
        Self::PathNotFound(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Errors decoding the per-record payload or UUID columns.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Payload is not a valid property list: {0}")]
    Payload(#[from] plist::Error),

    #[error("Invalid record UUID: {0}")]
    Uuid(#[from] uuid::Error),
}
