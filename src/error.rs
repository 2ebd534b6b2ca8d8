use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FrameError>;

/// Everything that can go wrong while building or querying a frame.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("cannot open '{path}': {source}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data row whose field count disagrees with the header.
    /// `line` is the 1-based line number in the original file,
    /// skipped metadata lines included.
    #[error("malformed row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    #[error("column '{column}' has length {found}, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
