use super::CoordinateField;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("coordinate token '{0}' has length {1}, expected between 7 and 15 characters")]
    InvalidLength(String, usize),
    #[error("{field} sign ('+' or '-') missing from coordinate token '{token}'")]
    MissingSign {
        field: CoordinateField,
        token: String,
    },
    #[error("unexpected sign character at position {position} of coordinate token '{token}'")]
    UnexpectedSign { position: usize, token: String },
    #[error("{field} field '{text}' has {digits} digits, expected one of {expected:?}")]
    InvalidWidth {
        field: CoordinateField,
        text: String,
        digits: usize,
        expected: &'static [usize],
    },
    #[error("{field} field '{text}' contains non-digit characters")]
    NonDigit {
        field: CoordinateField,
        text: String,
    },
    #[error("{field} field '{text}' decodes to {value}, outside of [-{bound}, {bound}]")]
    OutOfRange {
        field: CoordinateField,
        text: String,
        value: f64,
        bound: f64,
    },
    #[error("{field} value {value} is not a finite number")]
    NotFinite { field: CoordinateField, value: f64 },
}
