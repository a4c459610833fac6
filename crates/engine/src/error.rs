//! Engine error types.

use thiserror::Error;

use crate::formula::ParseError;

/// Errors raised synchronously by a spreadsheet operation.
///
/// Every variant here means the operation performed no observable mutation:
/// the cell store and dependency graph are exactly as they were before the
/// call. Per-cell evaluation failures are not errors at this level; they are
/// stored as cell values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpreadsheetError {
    /// The name fails the intrinsic shape or the configured validator.
    #[error("invalid cell name {0:?}")]
    InvalidName(String),

    /// The contents began with `=` but did not parse as a formula.
    #[error("malformed formula: {0}")]
    Formula(#[from] ParseError),

    /// Committing the edit would make the named cell depend on itself.
    #[error("a formula in {0} would create a circular dependency")]
    Circular(String),
}
