use rusqlite::{Connection, Result};

/// Column definitions of the `tasks` table
const TASKS_COLUMNS: &str = "
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL,
    deadline TEXT,
    status TEXT CHECK(status IN ('pending', 'completed')) NOT NULL DEFAULT 'pending'
";

/// One row of `PRAGMA table_info`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub decl_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    pub primary_key: bool,
}

/// Schema management for the `tasks` table
///
/// There is no version tracking. Startup either resets the table (the
/// default, every run begins empty) or creates it only when missing.
pub struct SchemaManager;

impl SchemaManager {
    /// Create the `tasks` table if it does not exist yet. Existing rows are kept.
    pub fn initialize(conn: &Connection) -> Result<()> {
        conn.execute(
            &format!("CREATE TABLE IF NOT EXISTS tasks ({})", TASKS_COLUMNS),
            [],
        )?;
        Ok(())
    }

    /// Drop any existing `tasks` table and recreate it empty.
    ///
    /// Both statements run in one transaction so a failed create leaves the
    /// old table in place.
    pub fn reset(conn: &Connection) -> Result<()> {
        let tx = conn.unchecked_transaction()?;
        tx.execute("DROP TABLE IF EXISTS tasks", [])?;
        tx.execute(&format!("CREATE TABLE tasks ({})", TASKS_COLUMNS), [])?;
        tx.commit()
    }

    /// Columns of the current `tasks` table, empty if the table is absent
    pub fn table_columns(conn: &Connection) -> Result<Vec<ColumnInfo>> {
        let mut stmt = conn.prepare("PRAGMA table_info(tasks)")?;
        let rows = stmt.query_map([], |row| {
            Ok(ColumnInfo {
                name: row.get(1)?,
                decl_type: row.get(2)?,
                not_null: row.get::<_, i64>(3)? != 0,
                default_value: row.get(4)?,
                primary_key: row.get::<_, i64>(5)? != 0,
            })
        })?;

        let mut columns = Vec::new();
        for column in rows {
            columns.push(column?);
        }
        Ok(columns)
    }
}
