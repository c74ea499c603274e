/// Task status
///
/// Only two states exist. The storage layer enforces the same set with a
/// CHECK constraint, so a row can never hold anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TaskStatus::Pending),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task model (one row of the `tasks` table)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub deadline: Option<String>, // free-form, never parsed
    pub status: TaskStatus,
}

impl Task {
    /// Deadline as shown to the user, `N/A` when absent
    pub fn deadline_display(&self) -> &str {
        self.deadline.as_deref().unwrap_or("N/A")
    }
}

/// Replacement values for an update
///
/// `None` keeps the stored value. Status has no default and is always written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub status: TaskStatus,
}

impl TaskChanges {
    /// Change only the status, keeping description and deadline
    pub fn status_only(status: TaskStatus) -> Self {
        Self {
            description: None,
            deadline: None,
            status,
        }
    }
}
