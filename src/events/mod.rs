//! Observer plumbing for schedule activity
//!
//! The store emits a [`ScheduleEvent`] through an [`ObserverRegistry`]
//! after every successful mutation. [`EventLogger`] is the stock
//! subscriber; anything implementing [`ScheduleObserver`] can be
//! registered alongside it.

mod logger;
mod registry;
mod types;

pub use logger::EventLogger;
pub use registry::{ObserverRegistry, ScheduleObserver};
pub use types::ScheduleEvent;
