//! Errors returned by schedule store operations

use thiserror::Error;

/// Errors that can occur while mutating the schedule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The task's time window overlaps an already scheduled task
    #[error("Task {description:?} conflicts with existing task {existing:?}")]
    Conflict { description: String, existing: String },

    /// No stored task matches the given description
    #[error("No task found with description {description:?}")]
    NotFound { description: String },
}

impl ScheduleError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ScheduleError::Conflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ScheduleError::NotFound { .. })
    }

    /// The existing task's description, if this is a conflict
    pub fn conflicting_task(&self) -> Option<&str> {
        match self {
            ScheduleError::Conflict { existing, .. } => Some(existing),
            _ => None,
        }
    }
}
