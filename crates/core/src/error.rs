//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic input-validation failure. There is no IO
/// in this core, so nothing here is transient or retryable; errors are
/// returned straight to the caller with the offending value in the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed catalog or schedule input (duplicate color, total mismatch,
    /// unsorted discount tiers, bad width record).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A bundle item failed validation (zero quantity, arithmetic overflow).
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// A color name was looked up that is not present in the catalog.
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn invalid_selection(msg: impl Into<String>) -> Self {
        Self::InvalidSelection(msg.into())
    }

    pub fn unknown_color(name: impl Into<String>) -> Self {
        Self::UnknownColor(name.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
