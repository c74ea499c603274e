use rusqlite::Connection;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

/// Database connection manager
///
/// Resolves where the task database lives and opens it. Schema handling is
/// left to [`SchemaManager`](crate::db::SchemaManager) so the caller decides
/// between a reset and a keep.
pub struct DbConnection;

impl DbConnection {
    /// Get the default database path (`tasks.db` in the working directory)
    pub fn default_path() -> PathBuf {
        PathBuf::from("tasks.db")
    }

    /// Get the configuration file path, if a home directory is known
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".taskman").join("rc"))
    }

    /// Resolve the database path.
    ///
    /// Precedence: explicit path, then `data.location=` in the rc file, then
    /// the default.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        if let Some(config_path) = Self::config_path() {
            if let Ok(config) = std::fs::read_to_string(&config_path) {
                let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
                if let Some(path) = parse_data_location(&config, config_dir) {
                    return path;
                }
            }
        }

        Self::default_path()
    }

    /// Open the database file, creating it and parent directories if needed
    pub fn open(db_path: &Path) -> Result<Connection> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database: {}", db_path.display()))?;
        log::debug!("Opened database at {}", db_path.display());

        Ok(conn)
    }

    /// Connect to an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Connection> {
        Connection::open_in_memory().context("Failed to open in-memory database")
    }
}

/// Extract `data.location=` from rc file contents.
///
/// Relative paths are resolved against `config_dir`. The first matching line
/// wins; blank values are ignored.
pub fn parse_data_location(config: &str, config_dir: &Path) -> Option<PathBuf> {
    for line in config.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("data.location=") {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let path = PathBuf::from(value);
            return Some(if path.is_relative() {
                config_dir.join(path)
            } else {
                path
            });
        }
    }
    None
}
