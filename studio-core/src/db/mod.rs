//! Database Module
//!
//! Handles the SQLite connection pool and migrations

pub mod repository;

use crate::core::Config;
use crate::utils::AppError;
use log::LevelFilter;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{ConnectOptions, SqlitePool};
use std::str::FromStr;
use std::time::Duration;

/// Database service, owns the SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database described by `config` and apply migrations
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let url = if config.is_in_memory() {
            "sqlite::memory:".to_string()
        } else {
            format!("sqlite:{}", config.db_path)
        };

        // SQL echo mirrors every statement into the log at info level
        let statement_level = if config.sql_echo {
            LevelFilter::Info
        } else {
            LevelFilter::Debug
        };

        let mut options = SqliteConnectOptions::from_str(&url)
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(statement_level)
            .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1));

        let mut pool_options = SqlitePoolOptions::new();
        if config.is_in_memory() {
            // Every connection to :memory: is its own database; keep exactly one alive
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            options = options.journal_mode(SqliteJournalMode::Wal);
            pool_options = pool_options.max_connections(config.max_connections.max(1));
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(path = %config.db_path, "Database connection established");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// Fresh private in-memory store with the schema applied
    pub async fn in_memory() -> Result<Self, AppError> {
        Self::new(&Config::in_memory()).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
