//! Persistence error types.

use thiserror::Error;

/// Errors raised at the persistence boundary.
///
/// `Read` covers every way a document can be malformed, including formulas
/// that would re-create a cycle on replay; load never surfaces the engine's
/// internal cycle error. `Version` is reserved for cells that were valid
/// when the document was written but fail the validator configured on the
/// loading instance.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document is malformed or inconsistent with the format.
    #[error("malformed document: {0}")]
    Read(String),

    /// A cell name passes the document's recorded validator but not the one
    /// configured for this instance.
    #[error("cell name {0:?} rejected by this instance's validator")]
    Version(String),

    /// The underlying reader or writer failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for DocumentError {
    fn from(err: quick_xml::Error) -> Self {
        // Surface transport failures as I/O, everything else as malformed.
        match err {
            quick_xml::Error::Io(io) => {
                DocumentError::Io(std::io::Error::new(io.kind(), io.to_string()))
            }
            other => DocumentError::Read(other.to_string()),
        }
    }
}
