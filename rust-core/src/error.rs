use thiserror::Error;

/// Errors surfaced by aperture generation, mask persistence and the CLI.
///
/// Interactive mask edits never produce these: a bad index or an empty click
/// is reported through `Option` instead.
#[derive(Error, Debug)]
pub enum MaskError {
    /// Generation parameters outside the valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A mask file line that is not exactly two finite numbers.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the source text.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A hole index past the end of the mask.
    #[error("hole index {index} out of range for a mask of {len} holes")]
    HoleIndex {
        /// Requested index.
        index: usize,
        /// Number of holes in the mask.
        len: usize,
    },

    /// Underlying file system failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
