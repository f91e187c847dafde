//! CLI-level errors (wraps infrastructure errors)

use std::io;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::exitcode;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    /// Some sources failed; each was reported as it was processed.
    #[error("{failed} of {total} sources failed")]
    SourcesFailed {
        failed: usize,
        total: usize,
        code: i32,
    },
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        Self::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => exitcode::USAGE,
            CliError::SourcesFailed { code, .. } => *code,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => exitcode::IOERR,
                InfraError::Application(e) => application_exit_code(e),
            },
        }
    }
}

/// Exit code for a failure while processing one source.
pub fn application_exit_code(e: &ApplicationError) -> i32 {
    match e {
        ApplicationError::Domain(_) | ApplicationError::Source { .. } => match e.domain() {
            Some(DomainError::LocatorContract { .. }) => exitcode::SOFTWARE,
            _ => exitcode::DATAERR,
        },
        ApplicationError::Config { .. } => exitcode::CONFIG,
        ApplicationError::OperationFailed { source, .. } => match source.downcast_ref::<io::Error>()
        {
            Some(io) if io.kind() == io::ErrorKind::NotFound => exitcode::NOINPUT,
            _ => exitcode::IOERR,
        },
    }
}
