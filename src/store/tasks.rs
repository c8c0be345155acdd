use std::sync::{Mutex, MutexGuard};

use crate::models::{Task, TaskUpdate};

/// In-memory task store.
///
/// Every operation takes the id of the authenticated user and only ever sees
/// tasks owned by that user: a wrong-owner access is indistinguishable from a
/// nonexistent id. Listing preserves insertion order.
pub struct TaskStore {
    inner: Mutex<Table>,
}

struct Table {
    tasks: Vec<Task>,
    next_id: i32,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Table { tasks, next_id }),
        }
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.inner.lock().expect("task table mutex poisoned")
    }

    pub fn list_for_user(&self, user_id: i32) -> Vec<Task> {
        self.table()
            .tasks
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn get_for_user(&self, user_id: i32, task_id: i32) -> Option<Task> {
        self.table()
            .tasks
            .iter()
            .find(|t| t.id == task_id && t.user_id == user_id)
            .cloned()
    }

    pub fn create(&self, user_id: i32, title: &str, description: &str) -> Task {
        let mut table = self.table();
        let task = Task::new(table.next_id, user_id, title.to_string(), description.to_string());
        table.next_id += 1;
        table.tasks.push(task.clone());
        task
    }

    /// Applies the fields present in `changes` to the user's task and returns
    /// the updated record, or `None` when no task with that id belongs to
    /// that user.
    pub fn update(&self, user_id: i32, task_id: i32, changes: &TaskUpdate) -> Option<Task> {
        let mut table = self.table();
        let task = table
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id && t.user_id == user_id)?;

        if let Some(title) = &changes.title {
            task.title = title.clone();
        }
        if let Some(description) = &changes.description {
            task.description = description.clone();
        }
        if let Some(completed) = changes.completed {
            task.completed = completed;
        }
        Some(task.clone())
    }

    /// Removes the user's task and returns the deleted record.
    pub fn delete(&self, user_id: i32, task_id: i32) -> Option<Task> {
        let mut table = self.table();
        let index = table
            .tasks
            .iter()
            .position(|t| t.id == task_id && t.user_id == user_id)?;
        Some(table.tasks.remove(index))
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
