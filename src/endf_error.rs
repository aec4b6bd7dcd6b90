//! Errors in ENDF-6 field values
use std::fmt::Display;

/// Type alias for a `Result` with [`EError`] as the error type.
pub type EResult<T> = Result<T, EError>;

/// An error related to an ENDF-6 field value
#[derive(Debug)]
pub enum EError {
    /// Indicates an error parsing a field as a given type.
    ParsingError{ s: String, t: &'static str, reason: String },
}

impl Display for EError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EError::ParsingError { s, t, reason } => {
                write!(f, "Could not parse '{s}' as a {t}: {reason}")
            },
        }
    }
}

impl std::error::Error for EError {}
