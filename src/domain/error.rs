//! Validation errors raised before a task exists

use thiserror::Error;

/// Errors that can occur while validating raw task input
///
/// These are raised during input construction; no [`Task`](crate::domain::Task)
/// value exists until every field has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Invalid time format: {0:?} (expected yyyy-MM-dd HH:mm)")]
    InvalidTimeFormat(String),

    #[error("Task times must be in the future")]
    TimeInPast,

    #[error("End time cannot be before start time")]
    EndBeforeStart,

    #[error("Invalid priority level: {0:?} (expected High, Medium, or Low)")]
    InvalidPriority(String),

    #[error("Invalid category: {0:?} (expected Leisure, Self Care, or Work)")]
    InvalidCategory(String),
}

impl ValidationError {
    /// Check if this error concerns the time fields
    pub fn is_time_error(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidTimeFormat(_) | ValidationError::TimeInPast | ValidationError::EndBeforeStart
        )
    }
}
