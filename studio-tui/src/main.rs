//! Studio TUI - 健身课程预约终端界面
//!
//! Run: cargo run -p studio-tui -- --db fitness_classes.db

mod app;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use studio_core::{Config, StudioState};

#[derive(Parser, Debug)]
#[command(name = "studio-tui", version)]
#[command(about = "Fitness studio class reservations")]
struct Args {
    /// SQLite database file (`:memory:` for a throwaway store)
    #[arg(long, env = "STUDIO_DB_PATH")]
    db: Option<String>,

    /// Log level: trace | debug | info | warn | error
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory for the rolling log file
    #[arg(long, env = "LOG_DIR")]
    log_dir: Option<String>,

    /// Log every SQL statement at info level
    #[arg(long, env = "STUDIO_SQL_ECHO")]
    sql_echo: bool,
}

impl Args {
    fn into_config(self) -> Config {
        let mut config = Config::from_env();
        if let Some(db) = self.db {
            config.db_path = db;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(dir) = self.log_dir {
            config.log_dir = Some(dir);
        }
        config.sql_echo |= self.sql_echo;
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Args::parse().into_config();

    let log_dir = config.resolved_log_dir();
    studio_core::init_logger_with_file(Some(&config.log_level), Some(&log_dir));
    tracing::info!(db = %config.db_path, log_dir = %log_dir.display(), "Starting studio");

    let state = StudioState::initialize(&config)
        .await
        .context("Failed to initialize studio")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(state.clone());
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    state.shutdown().await;
    tracing::info!("Studio closed");

    res.context("Terminal I/O failed")
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            app.handle_key(key).await;
        }
    }
    Ok(())
}
