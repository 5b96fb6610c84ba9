use crate::field::Field;
use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Normalized expression does not split into exactly 5 fields.
    #[error("expected 5 fields, found {0}")]
    WrongFieldCount(usize),
    /// A field token doesn't match any recognized grammar form.
    #[error("{field}: unrecognized token '{token}'")]
    Malformed {
        /// Field the token belongs to.
        field: Field,
        /// The offending token.
        token: String,
    },
    /// A literal value parses but falls outside the field's legal domain.
    #[error("{field}: value {value} is out of range {}-{}", .field.domain().0, .field.domain().1)]
    OutOfRange {
        /// Field the value belongs to.
        field: Field,
        /// The offending value.
        value: u32,
    },
    /// A range token has lower bound greater than upper bound.
    #[error("{field}: range lower bound exceeds upper bound in '{token}'")]
    InvalidRange {
        /// Field the range belongs to.
        field: Field,
        /// The offending token.
        token: String,
    },
    /// Schedule is syntactically valid but has no occurrences within the search horizon.
    #[error("no occurrence found within the search horizon")]
    NoOccurrenceFound,
}
