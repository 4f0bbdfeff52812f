//! Integration tests for astroplan
//!
//! These tests verify end-to-end behavior of the schedule store, the
//! observer wiring, and the `ap` binary driven over stdin.

use std::cell::RefCell;
use std::rc::Rc;

use assert_cmd::Command;
use chrono::{NaiveDate, NaiveDateTime};
use predicates::prelude::*;
use proptest::prelude::*;
use tempfile::TempDir;

use astroplan::config::Config;
use astroplan::domain::{Category, Priority, Task};
use astroplan::events::{ScheduleEvent, ScheduleObserver};
use astroplan::schedule::ScheduleStore;

fn dt(hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 5, 14)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn task(description: &str, start: NaiveDateTime, end: NaiveDateTime, priority: Priority, category: Category) -> Task {
    Task::new(description, start, end, priority, category).unwrap()
}

// =============================================================================
// Store Scenarios
// =============================================================================

#[test]
fn test_overlapping_add_is_rejected() {
    let mut store = ScheduleStore::new();
    store
        .add_task(task("Run", dt(9, 0), dt(10, 0), Priority::Medium, Category::Leisure))
        .expect("first task should be accepted");

    let err = store
        .add_task(task("Gym", dt(9, 30), dt(10, 30), Priority::High, Category::Work))
        .expect_err("overlapping task should be rejected");
    assert!(err.is_conflict());
    assert_eq!(err.conflicting_task(), Some("Run"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_back_to_back_add_is_rejected() {
    // Touching endpoints count as a conflict under the inclusive rule
    let mut store = ScheduleStore::new();
    store
        .add_task(task("Run", dt(9, 0), dt(10, 0), Priority::Medium, Category::Leisure))
        .unwrap();

    let err = store
        .add_task(task("Read", dt(10, 0), dt(11, 0), Priority::Low, Category::Leisure))
        .expect_err("back-to-back task should be rejected");
    assert!(err.is_conflict());
}

#[test]
fn test_full_day_lifecycle() {
    let mut store = ScheduleStore::new();
    store
        .add_task(task("Run", dt(7, 0), dt(8, 0), Priority::Medium, Category::Leisure))
        .unwrap();
    store
        .add_task(task("Standup", dt(9, 0), dt(9, 30), Priority::High, Category::Work))
        .unwrap();
    store
        .add_task(task("Nap", dt(13, 0), dt(14, 0), Priority::Low, Category::SelfCare))
        .unwrap();

    store.mark_completed("run").unwrap();
    store
        .edit_task(
            "Nap",
            task("Long Nap", dt(13, 0), dt(14, 30), Priority::Low, Category::SelfCare),
        )
        .unwrap();
    store.remove_task("standup").unwrap();

    let names: Vec<&str> = store.tasks_sorted_by_start().iter().map(|t| t.description()).collect();
    assert_eq!(names, ["Run", "Long Nap"]);
    assert!(store.tasks()[0].completed());
    assert!(!store.contains("Standup"));
}

#[test]
fn test_edit_atomicity_across_the_api() {
    let mut store = ScheduleStore::new();
    store
        .add_task(task("Run", dt(9, 0), dt(10, 0), Priority::Medium, Category::Leisure))
        .unwrap();
    store
        .add_task(task("Lunch", dt(12, 0), dt(13, 0), Priority::Low, Category::SelfCare))
        .unwrap();

    let err = store
        .edit_task(
            "Run",
            task("Jog", dt(12, 30), dt(13, 30), Priority::Medium, Category::Leisure),
        )
        .expect_err("replacement collides with Lunch");
    assert!(err.is_conflict());

    // The original survives, the replacement never landed
    assert_eq!(store.len(), 2);
    assert!(store.contains("Run"));
    assert!(!store.contains("Jog"));
}

// =============================================================================
// Observer Wiring
// =============================================================================

struct Recorder {
    seen: Rc<RefCell<Vec<String>>>,
}

impl ScheduleObserver for Recorder {
    fn notify(&self, event: &ScheduleEvent) {
        self.seen.borrow_mut().push(format!("{}", event));
    }
}

#[test]
fn test_observers_see_each_successful_mutation() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = ScheduleStore::new();
    store.register_observer(Box::new(Recorder { seen: Rc::clone(&seen) }));

    store
        .add_task(task("Run", dt(9, 0), dt(10, 0), Priority::Medium, Category::Leisure))
        .unwrap();
    store
        .edit_task(
            "Run",
            task("Jog", dt(9, 0), dt(9, 45), Priority::Medium, Category::Leisure),
        )
        .unwrap();
    store.mark_completed("Jog").unwrap();
    store.remove_task("Jog").unwrap();

    let events = seen.borrow();
    assert_eq!(
        events.as_slice(),
        [
            "added task \"Run\"",
            "edited task \"Run\" into \"Jog\"",
            "completed task \"Jog\"",
            "removed task \"Jog\"",
        ]
    );
}

#[test]
fn test_failed_operations_emit_nothing() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = ScheduleStore::new();
    store.register_observer(Box::new(Recorder { seen: Rc::clone(&seen) }));

    store
        .add_task(task("Run", dt(9, 0), dt(10, 0), Priority::Medium, Category::Leisure))
        .unwrap();
    let baseline = seen.borrow().len();

    let _ = store.add_task(task("Gym", dt(9, 30), dt(10, 30), Priority::High, Category::Work));
    let _ = store.remove_task("nonexistent");
    let _ = store.mark_completed("nonexistent");

    assert_eq!(seen.borrow().len(), baseline);
}

// =============================================================================
// Conflict Property
// =============================================================================

proptest! {
    /// Adding B after A fails iff the two windows intersect under the
    /// inclusive-boundary rule.
    #[test]
    fn prop_add_fails_iff_windows_intersect(
        start_a in 0u32..1000,
        len_a in 0u32..200,
        start_b in 0u32..1000,
        len_b in 0u32..200,
    ) {
        let base = NaiveDate::from_ymd_opt(2030, 5, 14).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let minutes = |m: u32| base + chrono::Duration::minutes(m as i64);

        let a = task("A", minutes(start_a), minutes(start_a + len_a), Priority::Medium, Category::Work);
        let b = task("B", minutes(start_b), minutes(start_b + len_b), Priority::Medium, Category::Work);

        let intersects = start_a <= start_b + len_b && start_b <= start_a + len_a;

        let mut store = ScheduleStore::new();
        store.add_task(a).unwrap();
        let result = store.add_task(b);

        prop_assert_eq!(result.is_err(), intersects);
        prop_assert_eq!(store.len(), if intersects { 1 } else { 2 });
    }
}

// =============================================================================
// Binary Smoke Tests
// =============================================================================

/// Write a config pointing history and logs into the temp dir
fn test_config(temp: &TempDir) -> std::path::PathBuf {
    let config = Config {
        history_file: temp.path().join("history"),
        log_dir: temp.path().join("logs"),
    };
    let path = temp.path().join("config.yml");
    config.save(&path).expect("Failed to write test config");
    path
}

#[test]
fn test_binary_exits_on_option_8() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);

    Command::cargo_bin("ap")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Astronaut Scheduler Menu:"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_binary_add_and_view_round_trip() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);

    let script = "1\n\
                  Run\n\
                  2030-05-14 09:00\n\
                  2030-05-14 10:00\n\
                  Medium\n\
                  Leisure\n\
                  2\n\
                  8\n";

    Command::cargo_bin("ap")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added successfully. No conflicts."))
        .stdout(predicate::str::contains("09:00 - 10:00: Run [Medium]  Leisure"));
}

#[test]
fn test_binary_rejects_bad_time_format() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);

    let script = "1\nRun\nnot-a-time\n8\n";

    Command::cargo_bin("ap")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid time format"));
}

#[test]
fn test_binary_invalid_option() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);

    Command::cargo_bin("ap")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .write_stdin("9\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid option. Please try again."));
}
