//! Class catalog seeding
//!
//! Fills the 7 x 3 weekly grid once. Idempotence is keyed on the slot: an
//! occupied (day, time) is left alone and an empty one is (re)filled, so a
//! partially seeded store gets backfilled instead of keeping holes.

use crate::db::repository::{RepoError, fitness_class};
use crate::utils::AppResult;
use shared::models::{
    DEFAULT_CAPACITY, FitnessClassCreate, TimeSlot, Weekday, class_id_for,
};
use sqlx::SqlitePool;

/// Class names in slot order (Saturday 8:00 first, Friday 12:00 last)
pub const CLASS_CATALOG: [&str; 21] = [
    "Basketball",
    "Soccer",
    "Tennis",
    "Volleyball",
    "Swimming",
    "Martial",
    "Gymnastics",
    "Track",
    "Cycling",
    "Yoga",
    "Golf",
    "Rugby",
    "Cricket",
    "Badminton",
    "Boxing",
    "Dance",
    "Ultimate",
    "Ice",
    "Snowboarding",
    "Water",
    "Archery",
];

/// Used once the catalog runs out of names
pub const FALLBACK_CLASS_NAME: &str = "Generic Class";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Slots that got a new class
    pub inserted: usize,
    /// Slots already occupied
    pub skipped: usize,
}

/// Seed one class per (day, slot), consuming `catalog` names in order.
///
/// Names are consumed per slot whether or not the slot is inserted, so a
/// given slot always receives the same name. All inserts commit together.
pub async fn seed_classes(pool: &SqlitePool, catalog: &[&str]) -> AppResult<SeedReport> {
    let mut names = catalog.iter().copied();
    let mut report = SeedReport::default();

    let mut tx = pool.begin().await.map_err(RepoError::from)?;

    for day in Weekday::ALL {
        for slot in TimeSlot::ALL {
            let name = names.next().unwrap_or(FALLBACK_CLASS_NAME);

            if fitness_class::find_by_slot(&mut *tx, day, slot.start())
                .await?
                .is_some()
            {
                report.skipped += 1;
                continue;
            }

            let data = FitnessClassCreate {
                id: class_id_for(day, slot),
                name: name.to_string(),
                day,
                time: slot.start().to_string(),
                capacity: DEFAULT_CAPACITY,
            };
            fitness_class::create(&mut *tx, &data).await?;
            tracing::debug!(class_id = %data.id, name = %data.name, %day, time = %data.time, "Seeded class");
            report.inserted += 1;
        }
    }

    tx.commit().await.map_err(RepoError::from)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::fitness_class::{count, find_all, find_by_id};
    use crate::db::repository::test_support::test_pool;
    use shared::models::ClassId;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_seed_fills_every_slot() {
        let pool = test_pool().await;
        let report = seed_classes(&pool, &CLASS_CATALOG).await.unwrap();
        assert_eq!(report, SeedReport { inserted: 21, skipped: 0 });

        let classes = find_all(&pool).await.unwrap();
        assert_eq!(classes.len(), 21);
        assert!(classes.iter().all(|c| c.capacity == 10));

        let first = find_by_id(&pool, ClassId(1)).await.unwrap().unwrap();
        assert_eq!((first.name.as_str(), first.day, first.time.as_str()), ("Basketball", Weekday::Saturday, "8:00"));
        let fifth = find_by_id(&pool, ClassId(5)).await.unwrap().unwrap();
        assert_eq!((fifth.name.as_str(), fifth.day, fifth.time.as_str()), ("Swimming", Weekday::Sunday, "10:00"));
        let last = find_by_id(&pool, ClassId(21)).await.unwrap().unwrap();
        assert_eq!((last.name.as_str(), last.day, last.time.as_str()), ("Archery", Weekday::Friday, "12:00"));
    }

    #[tokio::test]
    async fn test_seed_twice_creates_no_duplicates() {
        let pool = test_pool().await;
        seed_classes(&pool, &CLASS_CATALOG).await.unwrap();
        let report = seed_classes(&pool, &CLASS_CATALOG).await.unwrap();
        assert_eq!(report, SeedReport { inserted: 0, skipped: 21 });

        let classes = find_all(&pool).await.unwrap();
        assert_eq!(classes.len(), 21);
        let names: HashSet<&str> = classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), 21);
    }

    #[tokio::test]
    async fn test_seed_backfills_missing_slot() {
        let pool = test_pool().await;
        seed_classes(&pool, &CLASS_CATALOG).await.unwrap();
        sqlx::query("DELETE FROM class WHERE id = 5")
            .execute(&pool)
            .await
            .unwrap();

        let report = seed_classes(&pool, &CLASS_CATALOG).await.unwrap();
        assert_eq!(report, SeedReport { inserted: 1, skipped: 20 });
        let refilled = find_by_id(&pool, ClassId(5)).await.unwrap().unwrap();
        assert_eq!(refilled.name, "Swimming");
        assert_eq!(count(&pool).await.unwrap(), 21);
    }

    #[tokio::test]
    async fn test_short_catalog_falls_back_to_generic_name() {
        let pool = test_pool().await;
        seed_classes(&pool, &["Yoga", "Pilates"]).await.unwrap();

        let classes = find_all(&pool).await.unwrap();
        assert_eq!(classes.len(), 21);
        assert_eq!(classes[0].name, "Yoga");
        assert_eq!(classes[1].name, "Pilates");
        assert!(classes[2..].iter().all(|c| c.name == FALLBACK_CLASS_NAME));
    }
}
