//! Studio services
//!
//! Each service is a cheap handle over the shared pool; the UI constructs
//! them from [`crate::StudioState`].

pub mod identity;
pub mod reservation;
pub mod schedule;
pub mod seeding;

pub use identity::IdentityService;
pub use reservation::{ClassRoster, ReservationService, ReservationState};
pub use schedule::{CellClass, ScheduleCell, ScheduleGrid, ScheduleService};
pub use seeding::{CLASS_CATALOG, FALLBACK_CLASS_NAME, SeedReport, seed_classes};
