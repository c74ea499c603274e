use clap::Parser;
use rusqlite::Connection;
use crate::db::{DbConnection, SchemaManager};
use crate::cli::error::fatal_open_error;
use crate::cli::menu::Menu;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskman")]
#[command(about = "Task Manager - track pending and completed tasks from an interactive menu")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Path to the task database (overrides data.location in ~/.taskman/rc)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,
    /// Keep existing tasks instead of resetting the task table at startup
    #[arg(long)]
    pub keep: bool,
}

/// Parse arguments, open the store, reset the schema, and run the menu
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let db_path = DbConnection::resolve_path(cli.db.as_deref());
    log::debug!("Using database {}", db_path.display());

    let conn = match DbConnection::open(&db_path) {
        Ok(conn) => conn,
        Err(e) => fatal_open_error(&e),
    };
    prepare_schema(&conn, cli.keep)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(&conn, stdin.lock(), stdout.lock()).run()?;

    conn.close()
        .map_err(|(_, e)| e)
        .context("Failed to close database")?;
    Ok(())
}

/// Bring the `tasks` table into its startup state.
///
/// By default the table is dropped and recreated, discarding every task.
/// With `keep` the table is only created when missing.
pub fn prepare_schema(conn: &Connection, keep: bool) -> Result<()> {
    match SchemaManager::table_columns(conn) {
        Ok(columns) => {
            for column in &columns {
                log::debug!(
                    "Existing column: {} {} (not null: {}, default: {}, pk: {})",
                    column.name,
                    column.decl_type,
                    column.not_null,
                    column.default_value.as_deref().unwrap_or("none"),
                    column.primary_key
                );
            }
        }
        Err(e) => log::warn!("Could not read table info: {}", e),
    }

    if keep {
        log::info!("Keeping existing tasks");
        SchemaManager::initialize(conn).context("Failed to initialize database schema")?;
    } else {
        log::info!("Resetting tasks table");
        SchemaManager::reset(conn).context("Failed to reset database schema")?;
    }
    Ok(())
}

fn init_logging() {
    // Logs go to stderr so they never interleave with the menu on stdout
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}
