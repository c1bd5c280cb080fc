use crate::core::Config;
use crate::db::DbService;
use crate::services::{
    CLASS_CATALOG, IdentityService, ReservationService, ScheduleService, SeedReport, seed_classes,
};
use crate::utils::AppResult;
use sqlx::SqlitePool;

/// 应用状态
///
/// Owns the configuration and the database handle. Services are cheap
/// clones over the same pool.
///
/// # 示例
///
/// ```ignore
/// let state = StudioState::initialize(&Config::from_env()).await?;
/// let session = state.identity().login("Alice").await?;
/// let grid = state.schedule().grid(&session).await?;
/// ```
#[derive(Clone)]
pub struct StudioState {
    pub config: Config,
    pub db: DbService,
}

impl StudioState {
    /// 初始化应用状态
    ///
    /// 1. Open (or create) the store and apply migrations
    /// 2. Seed the class catalog; occupied slots are left alone
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(config).await?;
        let report = seed_classes(&db.pool, &CLASS_CATALOG).await?;
        log_seed(&report);

        Ok(Self {
            config: config.clone(),
            db,
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        self.db.pool()
    }

    pub fn identity(&self) -> IdentityService {
        IdentityService::new(self.db.pool.clone())
    }

    pub fn reservations(&self) -> ReservationService {
        ReservationService::new(self.db.pool.clone())
    }

    pub fn schedule(&self) -> ScheduleService {
        ScheduleService::new(self.db.pool.clone())
    }

    /// Close the pool; outstanding writes are flushed by SQLite.
    pub async fn shutdown(&self) {
        self.db.close().await;
    }
}

fn log_seed(report: &SeedReport) {
    if report.inserted > 0 {
        tracing::info!(inserted = report.inserted, skipped = report.skipped, "Class catalog seeded");
    } else {
        tracing::debug!(skipped = report.skipped, "Class catalog already present");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ClassId;

    #[tokio::test]
    async fn test_initialize_seeds_and_wires_services() {
        let state = StudioState::initialize(&Config::in_memory()).await.unwrap();

        let classes = crate::db::repository::fitness_class::count(state.pool()).await.unwrap();
        assert_eq!(classes, 21);

        state.identity().register("Alice").await.unwrap();
        let session = state.identity().login("Alice").await.unwrap();
        state.reservations().toggle(&session, ClassId(1)).await.unwrap();

        let grid = state.schedule().grid(&session).await.unwrap();
        assert_eq!(grid.cells()[0].action_label(), Some("Cancel"));
    }

    #[tokio::test]
    async fn test_initialize_twice_on_same_file_keeps_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studio.db");
        let config = Config::with_overrides(path.to_string_lossy());

        let first = StudioState::initialize(&config).await.unwrap();
        first.shutdown().await;
        let second = StudioState::initialize(&config).await.unwrap();

        let classes = crate::db::repository::fitness_class::count(second.pool()).await.unwrap();
        assert_eq!(classes, 21);
        second.shutdown().await;
    }
}
