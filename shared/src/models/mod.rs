//! Data models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Identifiers are `i64` newtypes (SQLite INTEGER PRIMARY KEY).

pub mod fitness_class;
pub mod ids;
pub mod member;
pub mod reservation;
pub mod schedule;

// Re-exports
pub use fitness_class::*;
pub use ids::*;
pub use member::*;
pub use reservation::*;
pub use schedule::*;
