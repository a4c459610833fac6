//! Formula error types.

use thiserror::Error;

/// Errors raised while constructing a [`Formula`](super::Formula).
///
/// Construction fails fast: a formula that parses is structurally valid and
/// can only fail later through [`EvalError`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A character that starts no token (`$`, `_`, `#`, ...).
    #[error("invalid token starting at {0:?}")]
    BadToken(char),

    /// A token that is legal on its own but appears where the grammar does
    /// not allow it (e.g. two numbers in a row, an operator after `(`).
    #[error("unexpected token {0:?}")]
    UnexpectedToken(String),

    /// More `)` than `(` at some point, or a nonzero balance at the end.
    #[error("unbalanced parentheses")]
    UnbalancedParens,

    /// No tokens after discarding whitespace.
    #[error("empty formula")]
    Empty,

    /// The last token is an operator.
    #[error("formula ends in an operator")]
    TrailingOperator,

    /// A variable that the normalizer or validator rejected.
    #[error("invalid variable {0:?}")]
    InvalidVariable(String),
}

/// Errors raised while evaluating a structurally valid formula.
///
/// These are the only two runtime failures a validated formula can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The lookup function had no numeric value for a variable.
    #[error("undefined variable {0}")]
    UndefinedVariable(String),

    /// A divisor evaluated to exactly zero.
    #[error("division by zero")]
    DivideByZero,
}

impl EvalError {
    /// Short marker a presentation layer can show in the failing cell.
    pub fn marker(&self) -> &'static str {
        match self {
            EvalError::UndefinedVariable(_) => "#UNDEF!",
            EvalError::DivideByZero => "#DIV/0!",
        }
    }
}
