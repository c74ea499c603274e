// Error reporting helpers for consistent messages and exit codes

use crate::error::TaskError;
use crate::models::TaskStatus;
use std::process;

/// Exit after the database could not be opened (exit code 1)
pub fn fatal_open_error(err: &anyhow::Error) -> ! {
    eprintln!("Database connection error: {:#}", err);
    process::exit(1);
}

/// Exit after an unexpected failure outside of a single operation (exit code 2)
pub fn unexpected_error(err: &anyhow::Error) -> ! {
    eprintln!("Unexpected error: {}", err);
    let mut source = err.source();
    if source.is_some() {
        eprintln!("\nCaused by:");
        let mut indent = 1;
        while let Some(cause) = source {
            eprintln!("{:indent$}  {}", "", cause);
            source = cause.source();
            indent += 1;
        }
    }
    process::exit(2);
}

/// Render a failed operation for the terminal.
///
/// Validation errors print their own message; storage errors are prefixed
/// with the action, e.g. `Error adding task: ...`.
pub fn format_operation_error(action: &str, err: &TaskError) -> String {
    if err.is_validation() {
        err.to_string()
    } else {
        format!("Error {}: {}", action, err)
    }
}

/// Parse a status typed by the user (case-insensitive, surrounding spaces ignored)
pub fn parse_status(input: &str) -> Result<TaskStatus, TaskError> {
    let normalized = input.trim().to_lowercase();
    TaskStatus::from_str(&normalized).ok_or(TaskError::InvalidStatus(normalized))
}
