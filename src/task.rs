//! Task collection and its mutations
//!
//! `TaskStore` owns the ordered task list. Insertion order is the canonical
//! display order; the only legal changes are append, delete-at-index,
//! in-place text edit and in-place completion toggle. Every successful
//! mutation writes the whole serialized collection back to the store under
//! the `"tasks"` key, so durable state always matches in-memory state.

use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use thiserror::Error;
use tracing::warn;

pub const TASKS_KEY: &str = "tasks";

/// A single to-do item. Identity is positional: a task is addressed by its
/// index in the owning collection and carries no id of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

/// Why a task mutation was refused. The operation is a no-op in every case;
/// prior state is preserved exactly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// Task text was empty or whitespace-only.
    #[error("task text must not be empty")]
    EmptyText,
    /// The addressed index does not exist in the collection.
    #[error("no task at index {0}")]
    OutOfRange(usize),
}

/// Ordered task collection with write-through persistence.
pub struct TaskStore {
    tasks: Vec<Task>,
    store: Rc<dyn KeyValueStore>,
}

impl TaskStore {
    /// Load the collection from the store. An absent or unparseable
    /// `"tasks"` entry yields an empty collection.
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        let tasks = match store.load(TASKS_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!(error = %e, "stored task list is unreadable, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Self { tasks, store }
    }

    /// Append a new pending task. Rejects whitespace-only text; the stored
    /// text is trimmed.
    pub fn add(&mut self, text: &str) -> Result<(), TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }
        self.tasks.push(Task::new(text));
        self.persist();
        Ok(())
    }

    /// Replace the text of the task at `index`, keeping its completion flag.
    pub fn update(&mut self, index: usize, text: &str) -> Result<(), TaskError> {
        if index >= self.tasks.len() {
            return Err(TaskError::OutOfRange(index));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }
        self.tasks[index].text = text.to_string();
        self.persist();
        Ok(())
    }

    /// Remove the task at `index`; tasks after it shift down by one.
    pub fn delete(&mut self, index: usize) -> Result<(), TaskError> {
        if index >= self.tasks.len() {
            return Err(TaskError::OutOfRange(index));
        }
        self.tasks.remove(index);
        self.persist();
        Ok(())
    }

    /// Flip the completion flag of the task at `index`.
    pub fn toggle_complete(&mut self, index: usize) -> Result<(), TaskError> {
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(TaskError::OutOfRange(index))?;
        task.completed = !task.completed;
        self.persist();
        Ok(())
    }

    /// Borrow the collection in canonical order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Read-only copy of the current collection. Never fails.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Write the full collection through to the store. Persisting the whole
    /// list rather than a delta keeps the stored value consistent with
    /// memory even after a restart mid-session.
    fn persist(&self) {
        match serde_json::to_string(&self.tasks) {
            Ok(json) => self.store.save(TASKS_KEY, &json),
            Err(e) => warn!(error = %e, "failed to serialize task list"),
        }
    }
}
