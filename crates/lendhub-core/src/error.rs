//! Unified application error types for LendHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
///
/// Not-found and authorization failures share the [`ErrorKind::NotFound`]
/// kind on purpose: an unauthorized caller must not be able to distinguish
/// "does not exist" from "exists but is not yours".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found (or the caller may not see it).
    NotFound,
    /// A booking's end does not come after its start.
    InvalidRange,
    /// The target item is not open for booking.
    ItemUnavailable,
    /// A status transition re-asserted the booking's current status.
    InvalidTransition,
    /// The caller has no finished rental of the item being commented on.
    NotEligible,
    /// The booking state filter keyword is not one of the known values.
    UnsupportedState,
    /// Input validation failed.
    Validation,
    /// A conflict occurred (duplicate entry, concurrent modification).
    Conflict,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::InvalidRange => write!(f, "INVALID_RANGE"),
            Self::ItemUnavailable => write!(f, "ITEM_UNAVAILABLE"),
            Self::InvalidTransition => write!(f, "INVALID_TRANSITION"),
            Self::NotEligible => write!(f, "NOT_ELIGIBLE"),
            Self::UnsupportedState => write!(f, "UNSUPPORTED_STATE"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout LendHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. Domain errors are returned to the
/// immediate caller and never retried or recovered internally; clients
/// branch on [`ErrorKind`], not on message text.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an invalid-range error.
    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRange, message)
    }

    /// Create an item-unavailable error.
    pub fn item_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ItemUnavailable, message)
    }

    /// Create an invalid-transition error.
    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidTransition, message)
    }

    /// Create a not-eligible error.
    pub fn not_eligible(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotEligible, message)
    }

    /// Create an unsupported-state error.
    pub fn unsupported_state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedState, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_are_distinct() {
        let kinds = [
            ErrorKind::NotFound,
            ErrorKind::InvalidRange,
            ErrorKind::ItemUnavailable,
            ErrorKind::InvalidTransition,
            ErrorKind::NotEligible,
            ErrorKind::UnsupportedState,
            ErrorKind::Validation,
            ErrorKind::Conflict,
            ErrorKind::Database,
            ErrorKind::Configuration,
            ErrorKind::Internal,
        ];
        let codes: std::collections::HashSet<String> =
            kinds.iter().map(|k| k.to_string()).collect();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = AppError::not_found("User 42 not found");
        assert_eq!(err.to_string(), "NOT_FOUND: User 42 not found");
    }
}
