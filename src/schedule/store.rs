//! Core ScheduleStore implementation

use tracing::{debug, info};

use crate::domain::{Category, Priority, Task};
use crate::events::{ObserverRegistry, ScheduleEvent, ScheduleObserver};

use super::error::ScheduleError;

/// The in-memory schedule: the single source of truth for the day's tasks
///
/// Tasks are kept in insertion order. No two stored tasks may have
/// overlapping time windows (inclusive boundaries, so back-to-back tasks
/// conflict). Lookups by description are case-insensitive; when duplicate
/// descriptions exist, the first match in insertion order wins.
///
/// The store is built by the application entry point and handed to
/// whatever consumes it; there is no global instance.
pub struct ScheduleStore {
    tasks: Vec<Task>,
    observers: ObserverRegistry,
}

impl ScheduleStore {
    /// Create an empty schedule
    pub fn new() -> Self {
        debug!("ScheduleStore::new: creating empty schedule");
        Self {
            tasks: Vec::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Register an observer to be notified after each successful mutation
    pub fn register_observer(&mut self, observer: Box<dyn ScheduleObserver>) {
        self.observers.register(observer);
    }

    /// Add a task, rejecting it if its window overlaps any stored task
    pub fn add_task(&mut self, task: Task) -> Result<(), ScheduleError> {
        if let Some(existing) = self.tasks.iter().find(|t| t.conflicts_with(&task)) {
            return Err(ScheduleError::Conflict {
                description: task.description().to_string(),
                existing: existing.description().to_string(),
            });
        }

        info!(description = task.description(), "ScheduleStore: task added");
        let event = ScheduleEvent::TaskAdded {
            description: task.description().to_string(),
        };
        self.tasks.push(task);
        self.observers.emit(&event);
        Ok(())
    }

    /// Replace the task matching `old_description` with `new_task`
    ///
    /// The replacement is conflict-checked against every *other* task; the
    /// task being replaced does not count as a conflict with itself. The
    /// operation is atomic: on conflict the store still holds the original
    /// task and not the replacement.
    pub fn edit_task(&mut self, old_description: &str, new_task: Task) -> Result<(), ScheduleError> {
        let index = self.find_index(old_description).ok_or_else(|| ScheduleError::NotFound {
            description: old_description.to_string(),
        })?;

        if let Some(existing) = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, t)| t)
            .find(|t| t.conflicts_with(&new_task))
        {
            return Err(ScheduleError::Conflict {
                description: new_task.description().to_string(),
                existing: existing.description().to_string(),
            });
        }

        let old = self.tasks.remove(index);
        info!(
            old_description = old.description(),
            description = new_task.description(),
            "ScheduleStore: task edited"
        );
        let event = ScheduleEvent::TaskEdited {
            old_description: old.description().to_string(),
            description: new_task.description().to_string(),
        };
        self.tasks.push(new_task);
        self.observers.emit(&event);
        Ok(())
    }

    /// Remove the task matching `description`, returning it
    pub fn remove_task(&mut self, description: &str) -> Result<Task, ScheduleError> {
        let index = self.find_index(description).ok_or_else(|| ScheduleError::NotFound {
            description: description.to_string(),
        })?;

        let removed = self.tasks.remove(index);
        info!(description = removed.description(), "ScheduleStore: task removed");
        self.observers.emit(&ScheduleEvent::TaskRemoved {
            description: removed.description().to_string(),
        });
        Ok(removed)
    }

    /// Mark the task matching `description` as completed
    ///
    /// Idempotent: completing an already completed task is a no-op success.
    pub fn mark_completed(&mut self, description: &str) -> Result<(), ScheduleError> {
        let index = self.find_index(description).ok_or_else(|| ScheduleError::NotFound {
            description: description.to_string(),
        })?;

        self.tasks[index].mark_completed();
        info!(
            description = self.tasks[index].description(),
            "ScheduleStore: task completed"
        );
        let event = ScheduleEvent::TaskCompleted {
            description: self.tasks[index].description().to_string(),
        };
        self.observers.emit(&event);
        Ok(())
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All tasks ordered by start time, insertion order breaking ties
    pub fn tasks_sorted_by_start(&self) -> Vec<&Task> {
        let mut sorted: Vec<&Task> = self.tasks.iter().collect();
        // stable sort keeps insertion order for equal start times
        sorted.sort_by_key(|t| t.start());
        sorted
    }

    /// Tasks with the given priority; unrecognized input yields no tasks
    pub fn tasks_by_priority(&self, input: &str) -> Vec<&Task> {
        match input.parse::<Priority>() {
            Ok(priority) => self.tasks.iter().filter(|t| t.priority() == priority).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Tasks in the given category; unrecognized input yields no tasks
    pub fn tasks_by_category(&self, input: &str) -> Vec<&Task> {
        match input.parse::<Category>() {
            Ok(category) => self.tasks.iter().filter(|t| t.category() == category).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Case-insensitive existence probe
    pub fn contains(&self, description: &str) -> bool {
        self.find_index(description).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    fn find_index(&self, description: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.matches_description(description))
    }
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}
