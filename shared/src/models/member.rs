//! Member Model

use super::MemberId;
use serde::{Deserialize, Serialize};

/// Member entity
///
/// Identified solely by its name; the name is matched exactly
/// (case- and whitespace-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub created_at: i64,
}

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreate {
    pub name: String,
}
