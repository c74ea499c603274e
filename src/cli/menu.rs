// Interactive menu loop

use crate::cli::error::{format_operation_error, parse_status};
use crate::cli::output::{format_task_list, ListKind};
use crate::error::TaskError;
use crate::models::TaskChanges;
use crate::repo::TaskRepo;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::io::{BufRead, Write};

const MENU: &str = "\nTask Manager Menu
1. Add a task
2. View all tasks
3. View pending tasks
4. View completed tasks
5. Update a task
6. Delete a task
7. Exit
";

/// Numbered menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    ViewPending,
    ViewCompleted,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::ViewAll),
            "3" => Some(MenuChoice::ViewPending),
            "4" => Some(MenuChoice::ViewCompleted),
            "5" => Some(MenuChoice::Update),
            "6" => Some(MenuChoice::Delete),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Menu loop over an open task database.
///
/// Reads choices and operation inputs from `input`, writes prompts and results
/// to `output`. Operation failures are rendered and the loop continues; only
/// I/O errors on `input`/`output` escape from [`Menu::run`].
pub struct Menu<'a, R, W> {
    conn: &'a Connection,
    input: R,
    output: W,
    eof: bool,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(conn: &'a Connection, input: R, output: W) -> Self {
        Self {
            conn,
            input,
            output,
            eof: false,
        }
    }

    /// Run until the user picks Exit or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let choice = self.prompt("Choose an option: ")?;
            if self.eof {
                log::debug!("End of input, leaving menu");
                return Ok(());
            }

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => self.add_task()?,
                Some(MenuChoice::ViewAll) => self.view_tasks(ListKind::All)?,
                Some(MenuChoice::ViewPending) => self.view_tasks(ListKind::Pending)?,
                Some(MenuChoice::ViewCompleted) => self.view_tasks(ListKind::Completed)?,
                Some(MenuChoice::Update) => self.update_task()?,
                Some(MenuChoice::Delete) => self.delete_task()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    self.output.flush()?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }
    }

    /// Print a prompt and read one trimmed line. Returns "" at end of input.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            self.eof = true;
        }
        Ok(line.trim().to_string())
    }

    fn report(&mut self, action: &str, err: &TaskError) -> Result<()> {
        if !err.is_validation() {
            log::debug!("Storage failure while {}: {}", action, err);
        }
        writeln!(self.output, "{}", format_operation_error(action, err))?;
        Ok(())
    }

    fn add_task(&mut self) -> Result<()> {
        let description = self.prompt("Enter task description: ")?;
        if description.is_empty() {
            return self.report("adding task", &TaskError::EmptyDescription);
        }
        let deadline = self.prompt("Enter deadline (YYYY-MM-DD) [optional]: ")?;

        match TaskRepo::create(self.conn, &description, Some(&deadline)) {
            Ok(_) => writeln!(self.output, "Task added successfully!")?,
            Err(e) => self.report("adding task", &e)?,
        }
        Ok(())
    }

    fn view_tasks(&mut self, kind: ListKind) -> Result<()> {
        match TaskRepo::list(self.conn, kind.status()) {
            Ok(tasks) => write!(self.output, "{}", format_task_list(&tasks, kind))?,
            Err(e) => self.report(kind.action(), &e)?,
        }
        Ok(())
    }

    fn update_task(&mut self) -> Result<()> {
        let id_input = self.prompt("Enter task ID to update: ")?;
        let task = match TaskRepo::find(self.conn, &id_input) {
            Ok(task) => task,
            Err(e) => return self.report("updating task", &e),
        };

        let description = self.prompt(&format!("Enter new description [{}]: ", task.description))?;
        let deadline = self.prompt(&format!(
            "Enter new deadline (YYYY-MM-DD) [{}]: ",
            task.deadline_display()
        ))?;
        let status_input = self.prompt("Enter new status (pending/completed): ")?;

        let status = match parse_status(&status_input) {
            Ok(status) => status,
            Err(e) => return self.report("updating task", &e),
        };

        let changes = TaskChanges {
            description: non_blank(description),
            deadline: non_blank(deadline),
            status,
        };
        match TaskRepo::update(self.conn, task.id, &changes) {
            Ok(_) => writeln!(self.output, "Task updated successfully!")?,
            Err(e) => self.report("updating task", &e)?,
        }
        Ok(())
    }

    fn delete_task(&mut self) -> Result<()> {
        let id_input = self.prompt("Enter task ID to delete: ")?;
        let result = TaskRepo::find(self.conn, &id_input)
            .and_then(|task| TaskRepo::delete(self.conn, task.id));

        match result {
            Ok(_) => writeln!(self.output, "Task deleted successfully!")?,
            Err(e) => self.report("deleting task", &e)?,
        }
        Ok(())
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
