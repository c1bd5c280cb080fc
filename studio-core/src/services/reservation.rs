//! Reservation toggle and class rosters
//!
//! Per (member, class) pair the state is either [`ReservationState::Unreserved`]
//! or [`ReservationState::Reserved`]; [`ReservationService::toggle`] flips it.
//! The existence check, capacity check and insert run inside one
//! transaction, and the insert itself only succeeds while the class is
//! below capacity.

use crate::db::repository::{RepoError, fitness_class, reservation};
use crate::session::Session;
use crate::utils::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use shared::models::{ClassId, FitnessClass};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationState {
    Unreserved,
    Reserved,
}

impl ReservationState {
    /// Label of the toggle button while in this state
    pub fn action_label(self) -> &'static str {
        match self {
            ReservationState::Unreserved => "Reserve",
            ReservationState::Reserved => "Cancel",
        }
    }

    /// Notice shown after a toggle landed in this state
    pub fn toggle_notice(self) -> &'static str {
        match self {
            ReservationState::Unreserved => "Reservation canceled.",
            ReservationState::Reserved => "Reservation successful.",
        }
    }
}

/// Who holds a seat in a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRoster {
    pub class: FitnessClass,
    /// In reservation order
    pub member_names: Vec<String>,
}

impl ClassRoster {
    pub const EMPTY_NOTICE: &'static str = "No members have reserved this class yet.";

    pub fn notice(&self) -> String {
        if self.member_names.is_empty() {
            Self::EMPTY_NOTICE.to_string()
        } else {
            shared::util::join_names(&self.member_names)
        }
    }
}

#[derive(Clone)]
pub struct ReservationService {
    pool: SqlitePool,
}

impl ReservationService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Current state of the session member's reservation in `class_id`
    pub async fn state(&self, session: &Session, class_id: ClassId) -> AppResult<ReservationState> {
        let held = reservation::find_for_pair(&self.pool, session.member_id(), class_id).await?;
        Ok(if held.is_some() {
            ReservationState::Reserved
        } else {
            ReservationState::Unreserved
        })
    }

    /// Reserve a seat, or cancel the one already held. Returns the new state.
    pub async fn toggle(&self, session: &Session, class_id: ClassId) -> AppResult<ReservationState> {
        let member_id = session.member_id();
        let mut tx = self.pool.begin().await.map_err(RepoError::from)?;

        let Some(class) = fitness_class::find_by_id(&mut *tx, class_id).await? else {
            tracing::warn!(%class_id, "Toggle rejected: class not found");
            return Err(AppError::class_not_found(class_id));
        };

        if let Some(existing) = reservation::find_for_pair(&mut *tx, member_id, class_id).await? {
            reservation::delete(&mut *tx, existing.id).await?;
            tx.commit().await.map_err(RepoError::from)?;
            tracing::info!(%member_id, %class_id, class = %class.name, "Reservation canceled");
            return Ok(ReservationState::Unreserved);
        }

        let inserted = reservation::insert_within_capacity(&mut *tx, member_id, class_id)
            .await
            .map_err(|e| match e {
                RepoError::Duplicate(_) => AppError::already_reserved(class_id),
                other => other.into(),
            })?;

        if !inserted {
            tracing::warn!(%member_id, %class_id, capacity = class.capacity, "Toggle rejected: class full");
            return Err(AppError::class_full(class_id, class.capacity));
        }

        tx.commit().await.map_err(RepoError::from)?;
        tracing::info!(%member_id, %class_id, class = %class.name, "Reservation created");
        Ok(ReservationState::Reserved)
    }

    /// Members holding a seat in `class_id`, in reservation order
    pub async fn members(&self, class_id: ClassId) -> AppResult<ClassRoster> {
        let Some(class) = fitness_class::find_by_id(&self.pool, class_id).await? else {
            return Err(AppError::class_not_found(class_id));
        };
        let member_names = reservation::member_names_for_class(&self.pool, class_id).await?;
        Ok(ClassRoster {
            class,
            member_names,
        })
    }
}
