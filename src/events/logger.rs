//! Event logger - writes one log line per schedule event
//!
//! The stock observer registered by the binary. Console output belongs to
//! the menu, so events go to the tracing subscriber (a log file by
//! default) for history and debugging.

use tracing::info;

use super::registry::ScheduleObserver;
use super::types::ScheduleEvent;

/// Observer that logs every schedule event
#[derive(Debug, Default)]
pub struct EventLogger;

impl EventLogger {
    pub fn new() -> Self {
        Self
    }
}

impl ScheduleObserver for EventLogger {
    fn notify(&self, event: &ScheduleEvent) {
        info!(event_type = event.event_type(), "{}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_accepts_every_event_kind() {
        // The logger must never panic, whatever the event
        let logger = EventLogger::new();
        let events = [
            ScheduleEvent::TaskAdded {
                description: "Run".to_string(),
            },
            ScheduleEvent::TaskEdited {
                old_description: "Run".to_string(),
                description: "Jog".to_string(),
            },
            ScheduleEvent::TaskRemoved {
                description: "Jog".to_string(),
            },
            ScheduleEvent::TaskCompleted {
                description: "Jog".to_string(),
            },
        ];
        for event in &events {
            logger.notify(event);
        }
    }
}
