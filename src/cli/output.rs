// Output formatting for task listings

use crate::models::{Task, TaskStatus};

/// Which listing the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    All,
    Pending,
    Completed,
}

impl ListKind {
    /// Status filter applied to the query
    pub fn status(&self) -> Option<TaskStatus> {
        match self {
            ListKind::All => None,
            ListKind::Pending => Some(TaskStatus::Pending),
            ListKind::Completed => Some(TaskStatus::Completed),
        }
    }

    fn header(&self) -> &'static str {
        match self {
            ListKind::All => "All Tasks:",
            ListKind::Pending => "Pending Tasks:",
            ListKind::Completed => "Completed Tasks:",
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            ListKind::All => "No tasks found.",
            ListKind::Pending => "No pending tasks.",
            ListKind::Completed => "No completed tasks.",
        }
    }

    /// Action name used in storage error messages
    pub fn action(&self) -> &'static str {
        match self {
            ListKind::All => "fetching tasks",
            ListKind::Pending => "fetching pending tasks",
            ListKind::Completed => "fetching completed tasks",
        }
    }
}

/// Format one task line. Status is only shown in the unfiltered listing.
pub fn format_task_line(task: &Task, kind: ListKind) -> String {
    match kind {
        ListKind::All => format!(
            "ID: {}, Description: {}, Deadline: {}, Status: {}",
            task.id,
            task.description,
            task.deadline_display(),
            task.status
        ),
        ListKind::Pending | ListKind::Completed => format!(
            "ID: {}, Description: {}, Deadline: {}",
            task.id,
            task.description,
            task.deadline_display()
        ),
    }
}

/// Format a whole listing, or the "no tasks" message when empty
pub fn format_task_list(tasks: &[Task], kind: ListKind) -> String {
    if tasks.is_empty() {
        return format!("{}\n", kind.empty_message());
    }

    let mut output = format!("\n{}\n", kind.header());
    for task in tasks {
        output.push_str(&format_task_line(task, kind));
        output.push('\n');
    }
    output
}
