//! Member Repository

use super::{RepoError, RepoResult};
use shared::models::{Member, MemberCreate, MemberId};
use sqlx::SqlitePool;

const MEMBER_SELECT: &str = "SELECT id, name, created_at FROM member";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Member>> {
    let sql = format!("{MEMBER_SELECT} ORDER BY id");
    let rows = sqlx::query_as::<_, Member>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: MemberId) -> RepoResult<Option<Member>> {
    let sql = format!("{MEMBER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Member>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Exact match: no trimming, case-sensitive
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Member>> {
    let sql = format!("{MEMBER_SELECT} WHERE name = ?");
    let row = sqlx::query_as::<_, Member>(&sql)
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert a member; a taken name surfaces as [`RepoError::Duplicate`]
pub async fn create(pool: &SqlitePool, data: MemberCreate) -> RepoResult<Member> {
    let now = shared::util::now_millis();
    let id: i64 = sqlx::query_scalar("INSERT INTO member (name, created_at) VALUES (?1, ?2) RETURNING id")
        .bind(&data.name)
        .bind(now)
        .fetch_one(pool)
        .await?;
    find_by_id(pool, MemberId(id))
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create member".into()))
}
