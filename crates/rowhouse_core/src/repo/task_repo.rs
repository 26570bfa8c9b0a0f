//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `tasks` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `Task::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Field updates and deletes return the affected-row count; zero means
//!   the id was absent and is not an error.

use rusqlite::{params, Connection, Row};

use crate::model::task::{completed_from_flag, Task, TaskId};
use crate::model::require_text;
use crate::repo::{bool_to_int, escape_like, RepoError, RepoResult};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    description,
    creation_datetime,
    completed
FROM tasks";

/// Repository interface for task CRUD operations.
pub trait TaskRepository {
    /// Inserts a task and returns the store-assigned id.
    fn create_task(&self, task: &Task) -> RepoResult<TaskId>;
    /// Fetches one task; absent ids yield `Ok(None)`.
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// Lists every task ordered by id.
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
    /// Lists tasks whose description contains `needle` anywhere.
    fn find_tasks(&self, needle: &str) -> RepoResult<Vec<Task>>;
    /// Rewrites one task's description, returning the affected-row count.
    fn update_description(&self, id: TaskId, description: &str) -> RepoResult<usize>;
    /// Applies an integer-coded completion flag, returning the
    /// affected-row count.
    fn update_completed(&self, id: TaskId, completed: i64) -> RepoResult<usize>;
    /// Deletes one task, returning the affected-row count.
    fn delete_task(&self, id: TaskId) -> RepoResult<usize>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId> {
        task.validate()?;

        self.conn.execute(
            "INSERT INTO tasks (description, creation_datetime, completed)
             VALUES (?1, ?2, ?3);",
            params![
                task.description.as_str(),
                task.creation_datetime,
                bool_to_int(task.completed),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn find_tasks(&self, needle: &str) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL} WHERE description LIKE ?1 ESCAPE '\\' ORDER BY id ASC;"
        ))?;

        let pattern = format!("%{}%", escape_like(needle));
        let mut rows = stmt.query(params![pattern])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn update_description(&self, id: TaskId, description: &str) -> RepoResult<usize> {
        require_text("description", description)?;

        let changed = self.conn.execute(
            "UPDATE tasks SET description = ?1 WHERE id = ?2;",
            params![description, id],
        )?;

        Ok(changed)
    }

    fn update_completed(&self, id: TaskId, completed: i64) -> RepoResult<usize> {
        let completed = completed_from_flag(completed)?;

        let changed = self.conn.execute(
            "UPDATE tasks SET completed = ?1 WHERE id = ?2;",
            params![bool_to_int(completed), id],
        )?;

        Ok(changed)
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1;", params![id])?;

        Ok(changed)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::Corrupt(format!(
                "invalid completed value `{other}` in tasks.completed"
            )));
        }
    };

    Ok(Task {
        id: Some(row.get("id")?),
        description: row.get("description")?,
        creation_datetime: row.get("creation_datetime")?,
        completed,
    })
}
