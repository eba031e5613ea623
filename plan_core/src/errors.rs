//! # Error Types
//!
//! Structured error types for plan_core. Every variant carries enough
//! context for a caller (CLI, HTTP layer, generative producer) to report
//! the problem without parsing strings.
//!
//! Several failure modes are deliberately *not* errors: an empty room list
//! yields an empty plan, a room that does not fit is dropped and logged, and
//! an unknown building type falls back to residential loads.
//!
//! ## Example
//!
//! ```rust
//! use plan_core::errors::{PlanError, PlanResult};
//!
//! fn validate_width(width: f64) -> PlanResult<()> {
//!     if width < 5.0 {
//!         return Err(PlanError::invalid_input(
//!             "terrain.width",
//!             width.to_string(),
//!             "Terrain width must be at least 5.0 m",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for plan_core operations
pub type PlanResult<T> = Result<T, PlanError>;

/// Structured error type for plan operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PlanError {
    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing (e.g. a plan without terrain or rooms)
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Document schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl PlanError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PlanError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        PlanError::MissingField {
            field: field.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        PlanError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a serde_json error
    pub fn serialization(err: impl std::fmt::Display) -> Self {
        PlanError::SerializationError {
            reason: err.to_string(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PlanError::InvalidInput { .. } => "INVALID_INPUT",
            PlanError::MissingField { .. } => "MISSING_FIELD",
            PlanError::FileError { .. } => "FILE_ERROR",
            PlanError::SerializationError { .. } => "SERIALIZATION_ERROR",
            PlanError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = PlanError::invalid_input("terrain.width", "3.0", "Terrain width must be at least 5.0 m");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: PlanError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(PlanError::missing_field("terrain").error_code(), "MISSING_FIELD");
        assert_eq!(
            PlanError::file_error("open", "plan.json", "not found").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_display_message() {
        let error = PlanError::missing_field("rooms");
        assert_eq!(error.to_string(), "Missing required field: rooms");
    }
}
