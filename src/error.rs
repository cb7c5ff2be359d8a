//! Error types for IGES reading.

use thiserror::Error;

/// Errors that can occur while reading IGES files.
#[derive(Error, Debug)]
pub enum IgesError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A numeric token could not be parsed, even after Fortran
    /// exponent normalization.
    #[error("malformed number: {token:?}")]
    MalformedNumber {
        /// The offending token, as it appeared in the file.
        token: String,
    },

    /// The section column held something other than S, G, D, P or T.
    #[error("unknown section tag {tag:?} on line {line}")]
    UnknownSectionTag {
        /// The character found at the section column.
        tag: char,
        /// 1-based line number within the stream.
        line: usize,
    },

    /// A parameter record referenced a directory sequence number that
    /// was never seen.
    #[error("parameter record points at unknown directory entry {pointer}")]
    UnresolvedPointer {
        /// The dangling directory pointer.
        pointer: i32,
    },

    /// A parameter record held fewer tokens than its entity type requires.
    #[error("entity type {entity_type} expects {expected} parameters, found {actual}")]
    ParameterCountMismatch {
        /// IGES entity type number.
        entity_type: i32,
        /// Minimum token count for this record.
        expected: usize,
        /// Tokens actually present.
        actual: usize,
    },

    /// The stream ended while the second line of a directory entry was
    /// still outstanding.
    #[error("directory entry {sequence_number} is missing its second line")]
    MissingSecondDirectoryLine {
        /// Sequence number from the entry's first line.
        sequence_number: i32,
    },

    /// Parameter data arrived before any Global line, so the record and
    /// parameter delimiters are unknown.
    #[error("parameter data encountered before the global section")]
    MissingGlobalSection,

    /// Generic parse error
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type alias for IGES operations.
pub type Result<T> = std::result::Result<T, IgesError>;
