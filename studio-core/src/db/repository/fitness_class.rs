//! Fitness Class Repository

use super::{RepoError, RepoResult};
use shared::models::{ClassId, FitnessClass, FitnessClassCreate, Weekday};
use sqlx::{Executor, Sqlite, SqlitePool};

const CLASS_SELECT: &str = "SELECT id, name, day, time, capacity FROM class";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<FitnessClass>> {
    let sql = format!("{CLASS_SELECT} ORDER BY id");
    let rows = sqlx::query_as::<_, FitnessClass>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id<'e, E>(db: E, id: ClassId) -> RepoResult<Option<FitnessClass>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!("{CLASS_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, FitnessClass>(&sql)
        .bind(id)
        .fetch_optional(db)
        .await?;
    Ok(row)
}

/// Class occupying a grid cell, `time` being the slot start
pub async fn find_by_slot<'e, E>(db: E, day: Weekday, time: &str) -> RepoResult<Option<FitnessClass>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!("{CLASS_SELECT} WHERE day = ? AND time = ? ORDER BY id LIMIT 1");
    let row = sqlx::query_as::<_, FitnessClass>(&sql)
        .bind(day)
        .bind(time)
        .fetch_optional(db)
        .await?;
    Ok(row)
}

pub async fn count<'e, E>(db: E) -> RepoResult<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let n = sqlx::query_scalar("SELECT COUNT(*) FROM class").fetch_one(db).await?;
    Ok(n)
}

/// Insert a class with an explicit id
///
/// The store rejects ids outside 1..=21 ([`RepoError::Validation`]) and a
/// second class in the same slot ([`RepoError::Duplicate`]).
pub async fn create<'e, E>(db: E, data: &FitnessClassCreate) -> RepoResult<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query(
        "INSERT INTO class (id, name, day, time, capacity) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(data.id)
    .bind(&data.name)
    .bind(data.day)
    .bind(&data.time)
    .bind(data.capacity)
    .execute(db)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::Database(format!("Failed to create class {}", data.id)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::{insert_class, test_pool};

    fn payload(id: i64, name: &str, day: Weekday, time: &str) -> FitnessClassCreate {
        FitnessClassCreate {
            id: ClassId(id),
            name: name.to_string(),
            day,
            time: time.to_string(),
            capacity: 10,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_slot() {
        let pool = test_pool().await;
        create(&pool, &payload(1, "Basketball", Weekday::Saturday, "8:00"))
            .await
            .unwrap();

        let class = find_by_slot(&pool, Weekday::Saturday, "8:00")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(class.id, ClassId(1));
        assert_eq!(class.name, "Basketball");
        assert_eq!(class.day, Weekday::Saturday);
        assert_eq!(class.capacity, 10);

        assert!(find_by_slot(&pool, Weekday::Saturday, "10:00").await.unwrap().is_none());
        assert!(find_by_slot(&pool, Weekday::Sunday, "8:00").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_day_stored_as_text() {
        let pool = test_pool().await;
        insert_class(&pool, 4, "Volleyball", "Sunday", "8:00", 10).await;
        let class = find_by_id(&pool, ClassId(4)).await.unwrap().unwrap();
        assert_eq!(class.day, Weekday::Sunday);
    }

    #[tokio::test]
    async fn test_store_rejects_id_above_21() {
        let pool = test_pool().await;
        let err = create(&pool, &payload(22, "Extra", Weekday::Friday, "16:00"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        assert_eq!(count(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_store_rejects_second_class_in_slot() {
        let pool = test_pool().await;
        create(&pool, &payload(1, "Basketball", Weekday::Saturday, "8:00"))
            .await
            .unwrap();
        let err = create(&pool, &payload(2, "Soccer", Weekday::Saturday, "8:00"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_find_all_orders_by_id() {
        let pool = test_pool().await;
        insert_class(&pool, 2, "Soccer", "Saturday", "10:00", 10).await;
        insert_class(&pool, 1, "Basketball", "Saturday", "8:00", 10).await;

        let all = find_all(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, ClassId(1));
        assert_eq!(all[1].name, "Soccer");
    }
}
