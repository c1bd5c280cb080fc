//! Weekly schedule grid
//!
//! Seven weekday rows (Saturday first) by three time-slot columns. Each cell
//! carries the class seeded for that exact (day, slot), so cell actions
//! always target the class the cell displays.

use crate::db::repository::{fitness_class, reservation};
use crate::services::reservation::ReservationState;
use crate::session::Session;
use crate::utils::AppResult;
use serde::{Deserialize, Serialize};
use shared::models::{ClassId, TimeSlot, Weekday, class_id_for};
use sqlx::SqlitePool;
use std::collections::{HashMap, HashSet};

/// Class shown in a grid cell, seen from the session member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellClass {
    pub id: ClassId,
    pub name: String,
    pub capacity: i64,
    /// Seats taken
    pub reserved: i64,
    pub state: ReservationState,
}

impl CellClass {
    pub fn is_full(&self) -> bool {
        self.reserved >= self.capacity
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleCell {
    pub day: Weekday,
    pub slot: TimeSlot,
    pub class: Option<CellClass>,
}

impl ScheduleCell {
    pub const EMPTY_LABEL: &'static str = "No class";

    pub fn label(&self) -> &str {
        self.class.as_ref().map_or(Self::EMPTY_LABEL, |c| c.name.as_str())
    }

    /// `Reserve` / `Cancel`, or nothing for an empty cell
    pub fn action_label(&self) -> Option<&'static str> {
        self.class.as_ref().map(|c| c.state.action_label())
    }

    pub fn class_id(&self) -> Option<ClassId> {
        self.class.as_ref().map(|c| c.id)
    }

    /// Id that cell actions act on: the displayed class, or the slot's
    /// catalog id when the cell is empty (which then resolves to nothing).
    pub fn target_id(&self) -> ClassId {
        self.class_id().unwrap_or_else(|| class_id_for(self.day, self.slot))
    }
}

/// Row-major 7 x 3 snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleGrid {
    cells: Vec<ScheduleCell>,
}

impl ScheduleGrid {
    pub fn cell(&self, day: Weekday, slot: TimeSlot) -> &ScheduleCell {
        &self.cells[day.index() * TimeSlot::ALL.len() + slot.index()]
    }

    pub fn row(&self, day: Weekday) -> &[ScheduleCell] {
        let start = day.index() * TimeSlot::ALL.len();
        &self.cells[start..start + TimeSlot::ALL.len()]
    }

    pub fn cells(&self) -> &[ScheduleCell] {
        &self.cells
    }
}

#[derive(Clone)]
pub struct ScheduleService {
    pool: SqlitePool,
}

impl ScheduleService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Build the grid for `session`. Cells without a class are left empty.
    pub async fn grid(&self, session: &Session) -> AppResult<ScheduleGrid> {
        let classes = fitness_class::find_all(&self.pool).await?;
        let counts: HashMap<ClassId, i64> = reservation::counts_by_class(&self.pool)
            .await?
            .into_iter()
            .collect();
        let mine: HashSet<ClassId> = reservation::class_ids_for_member(&self.pool, session.member_id())
            .await?
            .into_iter()
            .collect();

        let mut by_slot = HashMap::with_capacity(classes.len());
        for class in classes {
            match class.slot() {
                Some(slot) => {
                    by_slot.insert((class.day, slot), class);
                }
                None => {
                    tracing::warn!(class_id = %class.id, time = %class.time, "Class outside known slots");
                }
            }
        }

        let mut cells = Vec::with_capacity(Weekday::ALL.len() * TimeSlot::ALL.len());
        for day in Weekday::ALL {
            for slot in TimeSlot::ALL {
                let class = by_slot.remove(&(day, slot)).map(|c| CellClass {
                    reserved: counts.get(&c.id).copied().unwrap_or(0),
                    state: if mine.contains(&c.id) {
                        ReservationState::Reserved
                    } else {
                        ReservationState::Unreserved
                    },
                    id: c.id,
                    name: c.name,
                    capacity: c.capacity,
                });
                cells.push(ScheduleCell { day, slot, class });
            }
        }

        Ok(ScheduleGrid { cells })
    }
}
