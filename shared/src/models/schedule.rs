//! Weekly schedule axes
//!
//! The studio week starts on Saturday. Grid rows follow [`Weekday::ALL`]
//! and grid columns follow [`TimeSlot::ALL`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week a class runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Studio order (row order of the schedule grid)
    pub const ALL: [Weekday; 7] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Position in [`Weekday::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-hour time slot
///
/// Classes store only the slot start (`"8:00"`); the grid shows the full
/// label (`"8:00 - 10:00"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    Morning,
    LateMorning,
    Noon,
}

impl TimeSlot {
    /// Column order of the schedule grid
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::LateMorning, TimeSlot::Noon];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn start(self) -> &'static str {
        match self {
            TimeSlot::Morning => "8:00",
            TimeSlot::LateMorning => "10:00",
            TimeSlot::Noon => "12:00",
        }
    }

    pub fn end(self) -> &'static str {
        match self {
            TimeSlot::Morning => "10:00",
            TimeSlot::LateMorning => "12:00",
            TimeSlot::Noon => "14:00",
        }
    }

    /// Full label, e.g. `8:00 - 10:00`
    pub fn label(self) -> String {
        format!("{} - {}", self.start(), self.end())
    }

    /// Resolve a slot from its stored start time
    pub fn from_start(start: &str) -> Option<TimeSlot> {
        TimeSlot::ALL.into_iter().find(|s| s.start() == start)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start(), self.end())
    }
}
