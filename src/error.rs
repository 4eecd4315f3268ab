//! Error types for folio operations.

use thiserror::Error;

/// Errors that can occur while parsing titles, building a table of
/// contents, or rendering an outline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line matched none of the recognized title patterns. Carries the
    /// original, unmodified line text. The tree builder treats this as
    /// "not a title line" and skips it; it is never fatal there.
    #[error("'{0}' is improperly formatted")]
    TitleFormat(String),

    /// An insertion path implies an intermediate ancestor the tree does
    /// not contain. Fatal to that insertion.
    #[error("invalid path {0:?}")]
    InvalidPath(Vec<u32>),

    /// An unrecognized outline display mode string.
    #[error("'{0}' is an invalid mode")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
