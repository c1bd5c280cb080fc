//! Error type

use super::codes::ErrorCode;
use super::category::ErrorCategory;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Display;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the studio, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - The message shown to the member
/// - Optional structured details for logs
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (offending name, class id, ...)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Category of the underlying code
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Domain errors are expected outcomes of member actions; system errors
    /// are not.
    pub fn is_system(&self) -> bool {
        matches!(self.category(), ErrorCategory::System)
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an already exists error
    pub fn already_exists(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::AlreadyExists, format!("{} already exists", r))
            .with_detail("resource", r)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    // ==================== Studio notices ====================

    /// Registration attempted with an empty name
    pub fn name_required() -> Self {
        Self::with_message(
            ErrorCode::RequiredField,
            "Please enter a name for the new member.",
        )
        .with_detail("field", "name")
    }

    /// Login with a name nobody registered
    pub fn member_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorCode::MemberNotFound).with_detail("name", name.into())
    }

    /// Registration with a name already in use
    pub fn member_name_taken(name: impl Into<String>) -> Self {
        Self::new(ErrorCode::MemberNameTaken).with_detail("name", name.into())
    }

    /// Class id does not resolve
    pub fn class_not_found(class_id: impl Display) -> Self {
        Self::new(ErrorCode::ClassNotFound).with_detail("class_id", class_id.to_string())
    }

    /// Class has reached capacity
    pub fn class_full(class_id: impl Display, capacity: i64) -> Self {
        Self::new(ErrorCode::ClassFull)
            .with_detail("class_id", class_id.to_string())
            .with_detail("capacity", capacity)
    }

    /// Pair already holds a seat (store uniqueness violation)
    pub fn already_reserved(class_id: impl Display) -> Self {
        Self::new(ErrorCode::AlreadyReserved).with_detail("class_id", class_id.to_string())
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
