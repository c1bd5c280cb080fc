//! Error handling
//!
//! Re-exports the unified error types from `shared` and maps repository
//! failures onto them.

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

use crate::db::repository::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Duplicate(msg) => AppError::already_exists(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Log system errors; domain errors are ordinary outcomes and stay quiet.
pub fn log_if_system(err: &AppError) {
    if err.is_system() {
        tracing::error!(code = %err.code, message = %err.message, "System error occurred");
    }
}
