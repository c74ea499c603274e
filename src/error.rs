use thiserror::Error;

/// Result type alias for task repository operations
pub type Result<T> = std::result::Result<T, TaskError>;

/// Outcome of a failed task operation.
///
/// Validation variants carry the exact message shown to the user. Storage
/// failures wrap the underlying SQLite error; the caller decides how to
/// prefix them ("Error adding task: ..." and so on).
#[derive(Error, Debug)]
pub enum TaskError {
    /// Description was empty after trimming
    #[error("Task description cannot be empty.")]
    EmptyDescription,

    /// Status outside of pending/completed
    #[error("Invalid status! Task not updated.")]
    InvalidStatus(String),

    /// No task matches the given id
    #[error("Task not found.")]
    NotFound(String),

    /// Statement failed in SQLite (constraint, I/O, malformed SQL)
    #[error("{0}")]
    Storage(#[from] rusqlite::Error),
}

impl TaskError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskError::NotFound(_))
    }

    /// Validation failures abort an operation before any write is attempted
    pub fn is_validation(&self) -> bool {
        !matches!(self, TaskError::Storage(_))
    }
}
