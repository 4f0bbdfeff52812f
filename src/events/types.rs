//! Event types for schedule activity
//!
//! One event is emitted for every successful mutation of the store:
//! add, edit, remove, complete. Failed operations emit nothing.

use serde::{Deserialize, Serialize};

/// The vocabulary of schedule activity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScheduleEvent {
    /// A task was added to the schedule
    TaskAdded { description: String },
    /// A task was replaced; `description` names the replacement
    TaskEdited {
        old_description: String,
        description: String,
    },
    /// A task was removed from the schedule
    TaskRemoved { description: String },
    /// A task was marked as completed
    TaskCompleted { description: String },
}

impl ScheduleEvent {
    /// Get the description of the task this event concerns
    pub fn description(&self) -> &str {
        match self {
            ScheduleEvent::TaskAdded { description }
            | ScheduleEvent::TaskEdited { description, .. }
            | ScheduleEvent::TaskRemoved { description }
            | ScheduleEvent::TaskCompleted { description } => description,
        }
    }

    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            ScheduleEvent::TaskAdded { .. } => "TaskAdded",
            ScheduleEvent::TaskEdited { .. } => "TaskEdited",
            ScheduleEvent::TaskRemoved { .. } => "TaskRemoved",
            ScheduleEvent::TaskCompleted { .. } => "TaskCompleted",
        }
    }
}

impl std::fmt::Display for ScheduleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleEvent::TaskAdded { description } => write!(f, "added task {description:?}"),
            ScheduleEvent::TaskEdited {
                old_description,
                description,
            } => write!(f, "edited task {old_description:?} into {description:?}"),
            ScheduleEvent::TaskRemoved { description } => write!(f, "removed task {description:?}"),
            ScheduleEvent::TaskCompleted { description } => write!(f, "completed task {description:?}"),
        }
    }
}
