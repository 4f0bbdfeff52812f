//! Prompt-side validation: raw input lines to a structured task draft
//!
//! Each raw field is checked here before any [`Task`] exists; the menu
//! surfaces the first [`ValidationError`] and returns to the main loop.
//! The wall-clock instant is passed in so the checks are deterministic
//! under test.

use chrono::NaiveDateTime;

use crate::domain::{Category, Priority, Task, ValidationError};

/// The fixed console time pattern, `yyyy-MM-dd HH:mm`
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Validated task fields, ready for the task factory
///
/// This is the structured intermediate between the prompts and the store:
/// either every field parsed and the draft exists, or the caller got a
/// typed error. No delimited-string round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub priority: Priority,
    pub category: Category,
}

impl TaskDraft {
    /// Hand the validated fields to the task factory
    pub fn into_task(self) -> Result<Task, ValidationError> {
        Task::new(self.description, self.start, self.end, self.priority, self.category)
    }
}

/// Parse a `yyyy-MM-dd HH:mm` line into a naive local date-time
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, ValidationError> {
    NaiveDateTime::parse_from_str(input.trim(), TIME_FORMAT)
        .map_err(|_| ValidationError::InvalidTimeFormat(input.trim().to_string()))
}

/// Check the window against the clock: both times in the future, end not
/// before start
pub fn validate_times(start: NaiveDateTime, end: NaiveDateTime, now: NaiveDateTime) -> Result<(), ValidationError> {
    if start < now || end < now {
        return Err(ValidationError::TimeInPast);
    }
    if end < start {
        return Err(ValidationError::EndBeforeStart);
    }
    Ok(())
}
