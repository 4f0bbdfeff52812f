//! Astroplan - astronaut daily schedule organizer
//!
//! A single-user, in-memory day planner driven by a console menu. Tasks
//! occupy fixed time windows; the schedule enforces that no two windows
//! overlap (inclusive boundaries, so back-to-back tasks conflict). State
//! lives only in process memory for the session.
//!
//! # Modules
//!
//! - [`domain`] - task record, priority and category enums, validation
//! - [`schedule`] - the store: add/edit/remove/complete and queries
//! - [`events`] - observer registry notified after each mutation
//! - [`menu`] - the interactive eight-option console menu
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod events;
pub mod menu;
pub mod schedule;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Category, Priority, Task, ValidationError};
pub use events::{EventLogger, ObserverRegistry, ScheduleEvent, ScheduleObserver};
pub use menu::MenuSession;
pub use schedule::{ScheduleError, ScheduleStore};
