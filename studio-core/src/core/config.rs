use std::path::{Path, PathBuf};

/// Default database file, created beside the working directory
pub const DEFAULT_DB_PATH: &str = "fitness_classes.db";

/// Special path that selects a private in-memory database
pub const IN_MEMORY_DB: &str = ":memory:";

/// Studio configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STUDIO_DB_PATH | fitness_classes.db | SQLite file (`:memory:` for a throwaway store) |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | `logs/` beside the database | directory for the rolling log file |
/// | STUDIO_SQL_ECHO | false | log every SQL statement at info level |
/// | MAX_CONNECTIONS | 5 | SQLite pool size |
///
/// # Example
///
/// ```ignore
/// STUDIO_DB_PATH=/tmp/studio.db STUDIO_SQL_ECHO=true cargo run -p studio-tui
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file
    pub db_path: String,
    /// tracing level: trace | debug | info | warn | error
    pub log_level: String,
    /// Log directory override
    pub log_dir: Option<String>,
    /// Echo SQL statements into the log
    pub sql_echo: bool,
    /// Pool size (forced to 1 for in-memory stores)
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            db_path: std::env::var("STUDIO_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            sql_echo: std::env::var("STUDIO_SQL_ECHO")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            max_connections: std::env::var("MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
        }
    }

    /// Override the database path, keeping everything else from the environment
    ///
    /// Mostly used by tests.
    pub fn with_overrides(db_path: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.db_path = db_path.into();
        config
    }

    /// Config for a throwaway in-memory store
    pub fn in_memory() -> Self {
        Self {
            db_path: IN_MEMORY_DB.into(),
            log_level: "info".into(),
            log_dir: None,
            sql_echo: false,
            max_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.db_path == IN_MEMORY_DB
    }

    /// Directory the log file goes to: `LOG_DIR`, else `logs/` next to the database
    pub fn resolved_log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return PathBuf::from(dir);
        }
        let parent = if self.is_in_memory() {
            None
        } else {
            Path::new(&self.db_path)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
        };
        parent.unwrap_or_else(|| Path::new(".")).join("logs")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
