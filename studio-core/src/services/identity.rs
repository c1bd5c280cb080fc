//! Login and registration
//!
//! Identity is a name and nothing else: no passwords, no tokens. Lookups are
//! exact, so `"alice"` and `"Alice "` are different members.

use crate::db::repository::{RepoError, member};
use crate::session::Session;
use crate::utils::validation::validate_member_name;
use crate::utils::{AppError, AppResult};
use shared::models::{Member, MemberCreate};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct IdentityService {
    pool: SqlitePool,
}

impl IdentityService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Resolve `name` to a member and open a session for it.
    ///
    /// Never creates a member.
    pub async fn login(&self, name: &str) -> AppResult<Session> {
        let Some(found) = member::find_by_name(&self.pool, name).await? else {
            tracing::warn!(name, "Login rejected: member not found");
            return Err(AppError::member_not_found(name));
        };
        tracing::info!(member_id = %found.id, name = %found.name, "Member logged in");
        Ok(Session::start(&found))
    }

    /// Register a new member. Does not log in.
    pub async fn register(&self, name: &str) -> AppResult<Member> {
        validate_member_name(name)?;

        if member::find_by_name(&self.pool, name).await?.is_some() {
            tracing::warn!(name, "Registration rejected: name taken");
            return Err(AppError::member_name_taken(name));
        }

        let created = member::create(
            &self.pool,
            MemberCreate {
                name: name.to_string(),
            },
        )
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => AppError::member_name_taken(name),
            other => other.into(),
        })?;

        tracing::info!(member_id = %created.id, name = %created.name, "Member registered");
        Ok(created)
    }

    /// Explicit end of a session; consuming it is the whole effect.
    pub fn logout(&self, session: Session) {
        tracing::info!(member_id = %session.member_id(), "Member logged out");
    }
}
