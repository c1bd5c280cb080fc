//! Reservation Repository

use super::RepoResult;
use shared::models::{ClassId, MemberId, Reservation};
use sqlx::{Executor, Sqlite, SqlitePool};

pub async fn find_for_pair<'e, E>(
    db: E,
    member_id: MemberId,
    class_id: ClassId,
) -> RepoResult<Option<Reservation>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, Reservation>(
        "SELECT id, member_id, class_id, created_at FROM reservation WHERE member_id = ? AND class_id = ? ORDER BY id LIMIT 1",
    )
    .bind(member_id)
    .bind(class_id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn count_for_class<'e, E>(db: E, class_id: ClassId) -> RepoResult<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let n = sqlx::query_scalar("SELECT COUNT(*) FROM reservation WHERE class_id = ?")
        .bind(class_id)
        .fetch_one(db)
        .await?;
    Ok(n)
}

/// Take a seat only while the class is below capacity
///
/// Count and insert happen in one statement. Returns `false` when the class
/// is full (or missing); a pair that already holds a seat surfaces as
/// [`super::RepoError::Duplicate`].
pub async fn insert_within_capacity<'e, E>(
    db: E,
    member_id: MemberId,
    class_id: ClassId,
) -> RepoResult<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "INSERT INTO reservation (member_id, class_id, created_at) \
         SELECT ?1, c.id, ?3 FROM class c \
         WHERE c.id = ?2 AND (SELECT COUNT(*) FROM reservation r WHERE r.class_id = c.id) < c.capacity",
    )
    .bind(member_id)
    .bind(class_id)
    .bind(now)
    .execute(db)
    .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn delete<'e, E>(db: E, id: i64) -> RepoResult<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query("DELETE FROM reservation WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Names of members holding a seat, in reservation order
pub async fn member_names_for_class(pool: &SqlitePool, class_id: ClassId) -> RepoResult<Vec<String>> {
    let names = sqlx::query_scalar(
        "SELECT m.name FROM reservation r JOIN member m ON m.id = r.member_id WHERE r.class_id = ? ORDER BY r.id",
    )
    .bind(class_id)
    .fetch_all(pool)
    .await?;
    Ok(names)
}

/// Classes the member currently holds a seat in
pub async fn class_ids_for_member(pool: &SqlitePool, member_id: MemberId) -> RepoResult<Vec<ClassId>> {
    let ids = sqlx::query_scalar("SELECT class_id FROM reservation WHERE member_id = ? ORDER BY class_id")
        .bind(member_id)
        .fetch_all(pool)
        .await?;
    Ok(ids)
}

/// Reserved seat count per class (classes without reservations are absent)
pub async fn counts_by_class(pool: &SqlitePool) -> RepoResult<Vec<(ClassId, i64)>> {
    let rows = sqlx::query_as::<_, (ClassId, i64)>(
        "SELECT class_id, COUNT(*) FROM reservation GROUP BY class_id ORDER BY class_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
