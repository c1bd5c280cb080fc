//! Unified error system for the studio
//!
//! This module provides the error handling used by every crate:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Member errors
//! - 2xxx: Class errors
//! - 3xxx: Reservation errors
//! - 9xxx: System errors
//!
//! Every domain error carries the notice text shown to the member, so the
//! UI can display `err.message` verbatim.
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::ClassFull);
//! assert_eq!(err.message, "Class is already full.");
//!
//! let err = AppError::class_not_found(42).with_detail("cell", "Monday 8:00");
//! assert_eq!(err.code, ErrorCode::ClassNotFound);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
