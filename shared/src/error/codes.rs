//! Unified error codes for the studio
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Member errors
//! - 2xxx: Class errors
//! - 3xxx: Reservation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values so codes stay stable in logs and serialized
/// payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Member ====================
    /// No member with the given name
    MemberNotFound = 1001,
    /// Member name already registered
    MemberNameTaken = 1002,

    // ==================== 2xxx: Class ====================
    /// Class id does not resolve to a class
    ClassNotFound = 2001,
    /// Class has no free seats
    ClassFull = 2002,

    // ==================== 3xxx: Reservation ====================
    /// (member, class) pair already holds a reservation
    AlreadyReserved = 3002,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message for this code
    ///
    /// Domain codes return the notice shown to the member.
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::RequiredField => "Required field is missing",

            // Member
            ErrorCode::MemberNotFound => "Member not found.",
            ErrorCode::MemberNameTaken => "A member with the same name already exists.",

            // Class
            ErrorCode::ClassNotFound => "Class not found.",
            ErrorCode::ClassFull => "Class is already full.",

            // Reservation
            ErrorCode::AlreadyReserved => "You already hold a seat in this class.",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            7 => Ok(ErrorCode::RequiredField),

            // Member
            1001 => Ok(ErrorCode::MemberNotFound),
            1002 => Ok(ErrorCode::MemberNameTaken),

            // Class
            2001 => Ok(ErrorCode::ClassNotFound),
            2002 => Ok(ErrorCode::ClassFull),

            // Reservation
            3002 => Ok(ErrorCode::AlreadyReserved),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
