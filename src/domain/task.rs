//! The task record: one scheduled activity in the day plan

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;
use crate::domain::{Category, Priority};

/// A scheduled activity with a fixed time window
///
/// Tasks are created only through the validating [`Task::new`] factory, so a
/// constructed value always satisfies `end >= start` and carries a non-empty
/// description. The only mutation after construction is the one-way
/// completion flip; editing a task is whole-record replacement in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    description: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    priority: Priority,
    category: Category,
    completed: bool,
}

impl Task {
    /// Validating factory: build a task from individually well-formed fields
    ///
    /// Rejects a blank description and an end time earlier than the start
    /// time. Scheduling checks (conflicts with other tasks) are not done
    /// here; they belong to the store.
    pub fn new(
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        priority: Priority,
        category: Category,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if end < start {
            return Err(ValidationError::EndBeforeStart);
        }
        Ok(Self {
            description,
            start,
            end,
            priority,
            category,
            completed: false,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Mark this task as completed. One-way: there is no transition back.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Case-insensitive match against a user-supplied description
    pub fn matches_description(&self, description: &str) -> bool {
        self.description.to_lowercase() == description.trim().to_lowercase()
    }

    /// Inclusive interval overlap: touching endpoints count as a conflict
    pub fn conflicts_with(&self, other: &Task) -> bool {
        !(self.start > other.end) && !(self.end < other.start)
    }
}

impl std::fmt::Display for Task {
    /// Listing line: `HH:mm - HH:mm: <description> [<priority>] <(Completed)> <category>`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}: {} [{}] {} {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.description,
            self.priority,
            if self.completed { "(Completed)" } else { "" },
            self.category,
        )
    }
}
