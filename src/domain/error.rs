//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::Rect;

/// Domain errors represent malformed grids and broken detection invariants.
/// A locator miss is not an error: it is `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("grid dimensions must be non-zero, got {height}x{width}")]
    ZeroDimension { height: usize, width: usize },

    #[error("grid of {height}x{width} cells is too large")]
    GridTooLarge { height: usize, width: usize },

    #[error("malformed dimension header: {header:?}")]
    MalformedHeader { header: String },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowTooLong {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected {expected} rows, found {found}")]
    MissingRows { expected: usize, found: usize },

    #[error("root box not found: grid border {0} is not a valid box")]
    RootNotFound(Rect),

    /// Programming error: the locator returned a box that does not start
    /// at the scanned cell.
    #[error("box locator contract violated: scanned ({row}, {col}) but found {found}")]
    LocatorContract { row: usize, col: usize, found: Rect },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
