//! Error types for the edgelist reader and the LP writer / result reader.
//!
//! These are distinct from [`hls_core::ScheduleError`] since they report
//! I/O and parse-boundary failures rather than core-invariant violations.

use thiserror::Error;

/// Errors raised while parsing an edgelist file.
#[derive(Debug, Error)]
pub enum EdgelistError {
    /// The file could not be read.
    #[error("failed to read edgelist: {0}")]
    Io(#[from] std::io::Error),

    /// A required `key=value` attribute was missing from a line.
    #[error("line {line}: missing required field '{field}'")]
    MissingField {
        /// 1-based line number.
        line: usize,
        /// The missing attribute key.
        field: String,
    },

    /// An attribute value was not a valid non-negative integer.
    #[error("line {line}: invalid value for '{field}': '{value}'")]
    InvalidValue {
        /// 1-based line number.
        line: usize,
        /// The attribute key whose value failed to parse.
        field: String,
        /// The offending raw value.
        value: String,
    },

    /// A data line did not have at least two whitespace-separated tokens.
    #[error("line {line}: expected '<root> <child> key=value...'")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
    },

    /// The file contained no edges.
    #[error("edgelist is empty")]
    Empty,
}

/// Errors raised while writing an LP file or reading a GLPK result table.
#[derive(Debug, Error)]
pub enum LpFileError {
    /// The file could not be written or read.
    #[error("LP file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A GLPK result line was not in the expected `Objective:` or
    /// `<k> <name> * <value> ...` form.
    #[error("unrecognized GLPK result line: '{0}'")]
    UnrecognizedLine(String),
}
