//! To-do subcommands; every reply is a JSON envelope on stdout.

use anyhow::Result;
use clap::Subcommand;
use rusqlite::Connection;
use serde::Serialize;

use rowhouse_core::{
    SqliteTaskRepository, Task, TaskIdEnvelope, TaskListEnvelope, TaskRepository,
};

#[derive(Subcommand)]
pub enum TasksAction {
    /// Add a task and print its assigned id.
    Add {
        /// Free-form description; must not be blank.
        description: String,
    },
    /// Print every task, oldest first.
    List,
    /// Print tasks whose description contains the needle.
    Search { needle: String },
    /// Print one task by id; an unknown id prints an empty list.
    Show { id: i64 },
    /// Mark a task completed.
    Done {
        id: i64,
        /// Mark the task as open again instead.
        #[arg(long)]
        undo: bool,
    },
    /// Replace a task's description.
    Rename { id: i64, description: String },
    /// Delete a task; deleting a missing id is a no-op.
    Rm { id: i64 },
}

pub fn run(conn: &Connection, action: TasksAction) -> Result<()> {
    let repo = SqliteTaskRepository::new(conn);

    match action {
        TasksAction::Add { description } => {
            let id = repo.create_task(&Task::new(description))?;
            print_json(&TaskIdEnvelope::new(id))
        }
        TasksAction::List => print_json(&TaskListEnvelope::new(repo.list_tasks()?)),
        TasksAction::Search { needle } => {
            print_json(&TaskListEnvelope::new(repo.find_tasks(&needle)?))
        }
        TasksAction::Show { id } => print_json(&TaskListEnvelope::single(repo.get_task(id)?)),
        TasksAction::Done { id, undo } => {
            repo.update_completed(id, if undo { 0 } else { 1 })?;
            print_json(&TaskIdEnvelope::new(id))
        }
        TasksAction::Rename { id, description } => {
            repo.update_description(id, &description)?;
            print_json(&TaskIdEnvelope::new(id))
        }
        TasksAction::Rm { id } => {
            repo.delete_task(id)?;
            print_json(&TaskIdEnvelope::new(id))
        }
    }
}

fn print_json<T: Serialize>(envelope: &T) -> Result<()> {
    println!("{}", serde_json::to_string(envelope)?);
    Ok(())
}
