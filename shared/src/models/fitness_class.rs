//! Fitness Class Model

use super::{ClassId, TimeSlot, Weekday};
use serde::{Deserialize, Serialize};

/// Seats per class
pub const DEFAULT_CAPACITY: i64 = 10;

/// Highest class id the store accepts (7 days x 3 slots)
pub const MAX_CLASS_ID: i64 = 21;

/// Class entity
///
/// Occupies one (day, time-slot) cell of the weekly grid. Immutable once
/// seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct FitnessClass {
    pub id: ClassId,
    pub name: String,
    pub day: Weekday,
    /// Start of the slot, e.g. `8:00`
    pub time: String,
    pub capacity: i64,
}

impl FitnessClass {
    pub fn slot(&self) -> Option<TimeSlot> {
        TimeSlot::from_start(&self.time)
    }
}

/// Create class payload (seeding only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessClassCreate {
    pub id: ClassId,
    pub name: String,
    pub day: Weekday,
    pub time: String,
    pub capacity: i64,
}

/// Deterministic class id for a grid cell: day-major, 1-based.
pub fn class_id_for(day: Weekday, slot: TimeSlot) -> ClassId {
    ClassId((day.index() * TimeSlot::ALL.len() + slot.index()) as i64 + 1)
}
