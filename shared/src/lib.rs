//! Shared types for the studio workspace
//!
//! Domain models, typed identifiers and the unified error system used by
//! both `studio-core` and `studio-tui`.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    ClassId, FitnessClass, Member, MemberId, Reservation, TimeSlot, Weekday,
};
