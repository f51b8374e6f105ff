//! # Input Errors
//!
//! The conversion core never fails; the only fallible edge is the
//! textual-input variant of the form. A parse that fails leaves the
//! form exactly as it was.

use thiserror::Error;

/// Result alias for fallible input paths
pub type InputResult<T> = Result<T, InputError>;

/// Rejection of malformed form input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The text did not parse as a real number
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
}
