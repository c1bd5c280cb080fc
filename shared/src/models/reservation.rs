//! Reservation Model

use super::{ClassId, MemberId};
use serde::{Deserialize, Serialize};

/// A single seat held by a member in a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: i64,
    pub member_id: MemberId,
    pub class_id: ClassId,
    pub created_at: i64,
}
