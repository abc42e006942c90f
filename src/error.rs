//! Error types for the detection store.
//!
//! Every store call site resolves to one of three kinds: the caller sent bad
//! input, there is nothing stored yet, or the backing store could not be
//! reached in time.

use std::fmt;
use thiserror::Error;

/// The main error type for store and handler operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The caller supplied missing or malformed input.
    #[error("{0}")]
    Validation(ValidationError),

    /// The store holds no records.
    #[error("no records stored")]
    NotFound,

    /// The backing store is unreachable or did not answer in time.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

/// A specialized Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a validation error for a single invalid field.
    #[must_use]
    pub fn invalid_field(field: impl Into<String>) -> Self {
        Self::Validation(ValidationError {
            missing: Vec::new(),
            invalid: vec![field.into()],
            ..Default::default()
        })
    }

    /// Create a store unavailable error.
    #[must_use]
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable(message.into())
    }

    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    #[must_use]
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

/// Field-level detail for a rejected request.
///
/// Both lists are collected in one pass over the required fields so the
/// caller learns about every problem at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    /// Required fields that were absent or `null`.
    pub missing: Vec<String>,
    /// Fields that were present but had the wrong type or an unusable value.
    pub invalid: Vec<String>,
    /// The body could not be parsed as JSON, so no field could be inspected.
    pub unreadable_body: bool,
}

impl ValidationError {
    /// Create an error for a body that is not valid JSON.
    #[must_use]
    pub fn unreadable_body() -> Self {
        Self {
            unreadable_body: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.unreadable_body && self.missing.is_empty() && self.invalid.is_empty()
    }
}

impl std::error::Error for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unreadable_body {
            return write!(f, "Request body could not be read as JSON");
        }
        match (self.missing.is_empty(), self.invalid.is_empty()) {
            (false, true) => write!(f, "Missing required fields: {}", self.missing.join(", ")),
            (true, false) => write!(f, "Invalid fields: {}", self.invalid.join(", ")),
            (false, false) => write!(
                f,
                "Missing required fields: {}; Invalid fields: {}",
                self.missing.join(", "),
                self.invalid.join(", ")
            ),
            (true, true) => write!(f, "Invalid request"),
        }
    }
}
