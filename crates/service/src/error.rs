//! Typed error enum for the service layer.

use std::fmt;

use storybook_storage::StorageError;
use thiserror::Error;

/// Which count behind a project summary failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryQuery {
    Pages,
    Characters,
    CharacterImages,
}

impl fmt::Display for SummaryQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pages => "page",
            Self::Characters => "character",
            Self::CharacterImages => "character image",
        })
    }
}

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (blank title, bad page number).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// One of the project summary counts failed; no partial summary is produced.
    #[error("{query} count query failed: {source}")]
    CountQuery {
        query: SummaryQuery,
        #[source]
        source: StorageError,
    },
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(StorageError::NotFound { .. }))
    }
}
