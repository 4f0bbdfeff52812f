//! Menu session management

use std::path::PathBuf;

use chrono::Local;
use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::config::Config;
use crate::domain::{Category, Task, ValidationError};
use crate::menu::prompts::{TaskDraft, parse_datetime, validate_times};
use crate::schedule::ScheduleStore;

/// Interactive menu session over one schedule store
///
/// The store is injected by the entry point and lives exactly as long as
/// the session; when the loop ends, the schedule is gone with it.
pub struct MenuSession {
    store: ScheduleStore,
    history_file: PathBuf,
}

impl MenuSession {
    /// Create a new menu session owning the given store
    pub fn new(store: ScheduleStore, config: &Config) -> Self {
        Self {
            store,
            history_file: config.history_file.clone(),
        }
    }

    /// Run the menu main loop until Exit, Ctrl-D, or readline failure
    pub fn run(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
        if rl.load_history(&self.history_file).is_err() {
            debug!(history_file = ?self.history_file, "MenuSession: no existing history");
        }

        self.print_welcome();

        loop {
            self.print_menu();
            let readline = rl.readline("Choose an option: ");

            match readline {
                Ok(line) => {
                    let choice = line.trim();
                    if choice.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(choice);

                    match choice {
                        "1" => self.handle_add(&mut rl)?,
                        "2" => self.handle_view_all(),
                        "3" => self.handle_remove(&mut rl)?,
                        "4" => self.handle_edit(&mut rl)?,
                        "5" => self.handle_complete(&mut rl)?,
                        "6" => self.handle_view_by_priority(&mut rl)?,
                        "7" => self.handle_view_by_category(&mut rl)?,
                        "8" => break,
                        _ => println!("Invalid option. Please try again."),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - back to the menu
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D - exit
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        if let Err(e) = rl.save_history(&self.history_file) {
            debug!(error = %e, "MenuSession: could not save history");
        }
        println!("Goodbye!");
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Astronaut Daily Schedule Organizer".bright_cyan().bold());
        println!();
    }

    fn print_menu(&self) {
        println!("Astronaut Scheduler Menu:");
        println!("1. Add Task");
        println!("2. View All Tasks");
        println!("3. Remove Task");
        println!("4. Edit Task");
        println!("5. Mark Task as Completed");
        println!("6. View Tasks by Priority");
        println!("7. View Tasks by Category");
        println!("8. Exit");
    }

    /// Read one trimmed line; `None` means the user cancelled (Ctrl-C/D)
    fn prompt(&self, rl: &mut DefaultEditor, text: &str) -> Result<Option<String>> {
        match rl.readline(text) {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!();
                Ok(None)
            }
            Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
        }
    }

    fn report(&self, err: &ValidationError) {
        println!("{} {}", "Error:".red(), err);
    }

    /// Prompt for the five task fields, validating each as it arrives
    ///
    /// Returns `None` when the input was cancelled or rejected; the
    /// rejection has already been printed by then.
    fn read_draft(&self, rl: &mut DefaultEditor) -> Result<Option<TaskDraft>> {
        let Some(description) = self.prompt(rl, "Enter task description: ")? else {
            return Ok(None);
        };

        let Some(start_text) = self.prompt(rl, "Enter task start time (yyyy-MM-dd HH:mm): ")? else {
            return Ok(None);
        };
        let start = match parse_datetime(&start_text) {
            Ok(t) => t,
            Err(e) => {
                self.report(&e);
                return Ok(None);
            }
        };

        let Some(end_text) = self.prompt(rl, "Enter task end time (yyyy-MM-dd HH:mm): ")? else {
            return Ok(None);
        };
        let end = match parse_datetime(&end_text) {
            Ok(t) => t,
            Err(e) => {
                self.report(&e);
                return Ok(None);
            }
        };

        if let Err(e) = validate_times(start, end, Local::now().naive_local()) {
            self.report(&e);
            return Ok(None);
        }

        let Some(priority_text) = self.prompt(rl, "Enter task priority level (High, Medium, Low): ")? else {
            return Ok(None);
        };
        let priority = match priority_text.parse() {
            Ok(p) => p,
            Err(e) => {
                self.report(&e);
                return Ok(None);
            }
        };

        let Some(category_text) = self.prompt(rl, "Enter task category (Leisure, Self Care, Work): ")? else {
            return Ok(None);
        };
        let category = match category_text.parse() {
            Ok(c) => c,
            Err(e) => {
                self.report(&e);
                return Ok(None);
            }
        };

        Ok(Some(TaskDraft {
            description,
            start,
            end,
            priority,
            category,
        }))
    }

    /// Build the task from a draft, reporting factory rejections
    fn build_task(&self, draft: TaskDraft) -> Option<Task> {
        match draft.into_task() {
            Ok(task) => Some(task),
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }

    fn handle_add(&mut self, rl: &mut DefaultEditor) -> Result<()> {
        let Some(draft) = self.read_draft(rl)? else {
            return Ok(());
        };
        let Some(task) = self.build_task(draft) else {
            return Ok(());
        };

        match self.store.add_task(task) {
            Ok(()) => println!("{} Task added successfully. No conflicts.", "✓".green()),
            Err(e) => println!("{} {}", "Error:".red(), e),
        }
        Ok(())
    }

    fn handle_view_all(&self) {
        let tasks = self.store.tasks_sorted_by_start();
        if tasks.is_empty() {
            println!("No tasks scheduled for the day.");
        } else {
            println!("Viewing all tasks:");
            for task in tasks {
                println!("{}", task);
            }
        }
    }

    fn handle_remove(&mut self, rl: &mut DefaultEditor) -> Result<()> {
        let Some(description) = self.prompt(rl, "Enter task description to remove: ")? else {
            return Ok(());
        };
        match self.store.remove_task(&description) {
            Ok(_) => println!("{} Task removed successfully.", "✓".green()),
            Err(e) => println!("{} {}", "Error:".red(), e),
        }
        Ok(())
    }

    fn handle_edit(&mut self, rl: &mut DefaultEditor) -> Result<()> {
        let Some(old_description) = self.prompt(rl, "Enter the description of the task to edit: ")? else {
            return Ok(());
        };
        if !self.store.contains(&old_description) {
            println!("{} No such task available.", "Error:".red());
            return Ok(());
        }

        let Some(draft) = self.read_draft(rl)? else {
            return Ok(());
        };
        let Some(task) = self.build_task(draft) else {
            return Ok(());
        };

        match self.store.edit_task(&old_description, task) {
            Ok(()) => println!("{} Task updated successfully.", "✓".green()),
            Err(e) => println!("{} {}", "Error:".red(), e),
        }
        Ok(())
    }

    fn handle_complete(&mut self, rl: &mut DefaultEditor) -> Result<()> {
        let Some(description) = self.prompt(rl, "Enter the description of the task to mark as completed: ")? else {
            return Ok(());
        };
        match self.store.mark_completed(&description) {
            Ok(()) => println!("{} Task marked as completed.", "✓".green()),
            Err(e) => println!("{} {}", "Error:".red(), e),
        }
        Ok(())
    }

    fn handle_view_by_priority(&mut self, rl: &mut DefaultEditor) -> Result<()> {
        let Some(input) = self.prompt(rl, "Enter the priority level (High, Medium, Low): ")? else {
            return Ok(());
        };
        let tasks = self.store.tasks_by_priority(&input);
        if tasks.is_empty() {
            println!("No tasks found with priority: {}", input);
        } else {
            println!("Viewing tasks with priority {}:", input);
            for task in tasks {
                println!("{}", task);
            }
        }
        Ok(())
    }

    fn handle_view_by_category(&mut self, rl: &mut DefaultEditor) -> Result<()> {
        let Some(input) = self.prompt(rl, "Enter the category (Leisure, Self Care, Work): ")? else {
            return Ok(());
        };
        // The category view validates its input up front; the priority view
        // deliberately does not and just comes back empty
        if input.parse::<Category>().is_err() {
            println!(
                "{} Invalid category. Please enter Leisure, Self Care, or Work.",
                "Error:".red()
            );
            return Ok(());
        }
        let tasks = self.store.tasks_by_category(&input);
        if tasks.is_empty() {
            println!("No tasks found in category: {}", input);
        } else {
            println!("Viewing tasks in category {}:", input);
            for task in tasks {
                println!("{}", task);
            }
        }
        Ok(())
    }
}
