//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{}: {source}", .path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    /// Attach the source path to a domain error.
    pub fn in_source(path: impl Into<PathBuf>, source: DomainError) -> Self {
        Self::Source {
            path: path.into(),
            source,
        }
    }

    /// The domain error behind this error, if any.
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) | Self::Source { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
