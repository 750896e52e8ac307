use ncprivacy_db::DbError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be located
    #[error("{0}")]
    PathNotFound(String),

    /// Database could not be opened or a query failed
    #[error("Database error: {0}")]
    Database(String),

    /// Malformed command-line argument (date, regex, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Settings file error
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<DbError> for CliError {
    fn from(e: DbError) -> Self {
        match e {
            e @ DbError::PathNotFound(_) => Self::PathNotFound(e.to_string()),
            DbError::InvalidArgument(msg) => Self::InvalidArgument(msg),
            other => Self::database(other.to_string()),
        }
    }
}
