use rusqlite::{Connection, OptionalExtension, Row};
use crate::error::{Result, TaskError};
use crate::models::{Task, TaskChanges, TaskStatus};

const SELECT_COLUMNS: &str = "SELECT id, description, deadline, status FROM tasks";

/// Task repository for database operations
///
/// Every function takes the connection explicitly and issues a single
/// statement (lookups before a write aside). The connection is in autocommit
/// mode, so each write is committed as soon as it returns. Nothing here
/// prints; callers render the returned outcome.
///
/// # Example
///
/// ```no_run
/// use taskman::db::{DbConnection, SchemaManager};
/// use taskman::repo::TaskRepo;
///
/// let conn = DbConnection::open_in_memory().unwrap();
/// SchemaManager::reset(&conn).unwrap();
/// let task = TaskRepo::create(&conn, "Buy milk", None).unwrap();
/// assert_eq!(task.status.as_str(), "pending");
/// ```
pub struct TaskRepo;

impl TaskRepo {
    /// Create a new pending task.
    ///
    /// The description is trimmed and must not be empty. The deadline is
    /// trimmed and stripped of surrounding double quotes; an empty deadline
    /// is stored as NULL.
    pub fn create(conn: &Connection, description: &str, deadline: Option<&str>) -> Result<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }
        let deadline = deadline.and_then(normalize_deadline);

        conn.execute(
            "INSERT INTO tasks (description, deadline) VALUES (?1, ?2)",
            rusqlite::params![description, deadline],
        )?;

        let id = conn.last_insert_rowid();
        log::debug!("Inserted task {}", id);

        Ok(Task {
            id,
            description: description.to_string(),
            deadline,
            status: TaskStatus::Pending,
        })
    }

    /// Get task by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<Task>> {
        let mut stmt = conn.prepare(&format!("{} WHERE id = ?1", SELECT_COLUMNS))?;
        let task = stmt.query_row([id], task_from_row).optional()?;
        Ok(task)
    }

    /// Look up a task from user-entered id text.
    ///
    /// The trimmed text is bound as-is and SQLite applies the column's integer
    /// affinity, so `1`, `+1`, `1.0` and `1e0` all name task 1. Text that does
    /// not convert to an integer never matches and reports not found.
    pub fn find(conn: &Connection, id_input: &str) -> Result<Task> {
        let id_input = id_input.trim();
        let mut stmt = conn.prepare(&format!("{} WHERE id = ?1", SELECT_COLUMNS))?;
        stmt.query_row([id_input], task_from_row)
            .optional()?
            .ok_or_else(|| TaskError::NotFound(id_input.to_string()))
    }

    /// List tasks in insertion order, optionally restricted to one status
    pub fn list(conn: &Connection, status: Option<TaskStatus>) -> Result<Vec<Task>> {
        let tasks = match status {
            Some(status) => {
                let mut stmt =
                    conn.prepare(&format!("{} WHERE status = ?1 ORDER BY id", SELECT_COLUMNS))?;
                let rows = stmt.query_map([status.as_str()], task_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            None => {
                let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
                let rows = stmt.query_map([], task_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };

        log::debug!(
            "Listed {} task(s) (status filter: {})",
            tasks.len(),
            status.map(|s| s.as_str()).unwrap_or("none")
        );
        Ok(tasks)
    }

    /// List every task
    pub fn list_all(conn: &Connection) -> Result<Vec<Task>> {
        Self::list(conn, None)
    }

    /// List pending tasks
    pub fn list_pending(conn: &Connection) -> Result<Vec<Task>> {
        Self::list(conn, Some(TaskStatus::Pending))
    }

    /// List completed tasks
    pub fn list_completed(conn: &Connection) -> Result<Vec<Task>> {
        Self::list(conn, Some(TaskStatus::Completed))
    }

    /// Number of stored tasks
    pub fn count(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Replace description, deadline, and status of an existing task.
    ///
    /// Blank or missing description/deadline keep the stored values. All three
    /// columns are written by one UPDATE statement.
    pub fn update(conn: &Connection, id: i64, changes: &TaskChanges) -> Result<Task> {
        let current = Self::get_by_id(conn, id)?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        let description = changes
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .unwrap_or(current.description);
        let deadline = changes
            .deadline
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .or(current.deadline);

        let updated = conn.execute(
            "UPDATE tasks SET description = ?1, deadline = ?2, status = ?3 WHERE id = ?4",
            rusqlite::params![description, deadline, changes.status.as_str(), id],
        )?;
        log::debug!("Updated task {} ({} row(s))", id, updated);

        Ok(Task {
            id,
            description,
            deadline,
            status: changes.status,
        })
    }

    /// Permanently delete a task, returning the removed row
    pub fn delete(conn: &Connection, id: i64) -> Result<Task> {
        let task = Self::get_by_id(conn, id)?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        let deleted = conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
        log::debug!("Deleted task {} ({} row(s))", id, deleted);

        Ok(task)
    }
}

/// Trim a deadline and strip surrounding double quotes; empty means absent
pub fn normalize_deadline(raw: &str) -> Option<String> {
    let deadline = raw.trim().trim_matches('"');
    if deadline.is_empty() {
        None
    } else {
        Some(deadline.to_string())
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    let status: String = row.get(3)?;
    let status = TaskStatus::from_str(&status).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            format!("unknown task status '{}'", status).into(),
        )
    })?;

    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        deadline: row.get(2)?,
        status,
    })
}
