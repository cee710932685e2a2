//! Taskpad Library
//!
//! This library is the state engine of a small task list manager: an ordered
//! collection of tasks with completion flags, display-time filtering, a
//! light/dark theme preference, and write-through persistence of both the
//! collection and the theme to a durable key-value store.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Composition Layer**: [`App`] - Receives UI intents and dispatches them
//! - **Domain Layer**: `task`, `filter`, `theme` modules - Collection state and pure derivations
//! - **Persistence Layer**: `storage` module - String-keyed durable store behind a trait
//!
//! Everything is single-threaded and synchronous: an intent runs to
//! completion, including its persistence write, before the next intent is
//! processed. Tasks are addressed positionally, which is only sound under
//! that execution model; a concurrent extension would need stable task ids.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use taskpad::{App, Filter, MemoryStore};
//!
//! # fn main() -> Result<(), taskpad::TaskError> {
//! let mut app = App::new(Rc::new(MemoryStore::new()));
//! app.submit("buy milk")?;
//! app.toggle_complete(0)?;
//! app.set_filter(Filter::Completed);
//! assert_eq!(app.view().tasks[0].text, "buy milk");
//! # Ok(())
//! # }
//! ```

mod filter;
mod storage;
mod task;
mod theme;

use std::path::Path;
use std::rc::Rc;

// Re-export commonly used types
pub use filter::{Filter, source_index, visible};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use task::{TASKS_KEY, Task, TaskError, TaskStore};
pub use theme::{THEME_KEY, Theme, ThemeController};

/// Everything a renderer needs to draw one frame. Recomputed on every
/// [`App::view`] call, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Tasks admitted by the current filter, in collection order.
    pub tasks: Vec<Task>,
    pub filter: Filter,
    pub theme: Theme,
    /// Whether a submit would update an existing task rather than add one.
    pub editing: bool,
    /// Input text to prefill while editing.
    pub pending: String,
}

/// Composition root: owns the task collection, the theme setting, the active
/// filter and the edit session, and dispatches UI intents to the right
/// place.
///
/// Intents that address an individual task carry a *display* index — the
/// task's position in the currently visible (filtered) list. `App` translates
/// it to the collection index before mutating; see [`source_index`].
pub struct App {
    tasks: TaskStore,
    theme: ThemeController,
    filter: Filter,
    editing: Option<usize>,
    pending: String,
}

impl App {
    /// Build the app over any key-value store, loading persisted state.
    /// Absent keys start an empty collection and the light theme.
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            tasks: TaskStore::new(Rc::clone(&store)),
            theme: ThemeController::new(store),
            filter: Filter::default(),
            editing: None,
            pending: String::new(),
        }
    }

    /// Convenience constructor over a [`FileStore`] rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self::new(Rc::new(FileStore::new(dir)))
    }

    /// Submit the input box. While editing, updates the task under edit and
    /// ends the edit session; otherwise appends a new task. On an error the
    /// collection, the edit session and the pending text are all left
    /// untouched so the caller can re-prompt.
    pub fn submit(&mut self, text: &str) -> Result<(), TaskError> {
        match self.editing {
            Some(index) => {
                self.tasks.update(index, text)?;
                self.editing = None;
            }
            None => self.tasks.add(text)?,
        }
        self.pending.clear();
        Ok(())
    }

    /// Start editing the task shown at `display_index`, prefilling the
    /// pending text with its current text. There is no cancel intent: only a
    /// successful submit ends the session.
    pub fn begin_edit(&mut self, display_index: usize) -> Result<(), TaskError> {
        let index = self.resolve(display_index)?;
        self.pending = self.tasks.tasks()[index].text.clone();
        self.editing = Some(index);
        Ok(())
    }

    /// Delete the task shown at `display_index`.
    pub fn delete(&mut self, display_index: usize) -> Result<(), TaskError> {
        let index = self.resolve(display_index)?;
        self.tasks.delete(index)
    }

    /// Toggle completion of the task shown at `display_index`.
    pub fn toggle_complete(&mut self, display_index: usize) -> Result<(), TaskError> {
        let index = self.resolve(display_index)?;
        self.tasks.toggle_complete(index)
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Flip the theme, persist it and return the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    /// Read-only copy of the full, unfiltered collection.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.snapshot()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn pending_text(&self) -> &str {
        &self.pending
    }

    /// Derive the current frame for a renderer.
    pub fn view(&self) -> ViewState {
        ViewState {
            tasks: visible(self.tasks.tasks(), self.filter),
            filter: self.filter,
            theme: self.theme.current(),
            editing: self.editing.is_some(),
            pending: self.pending.clone(),
        }
    }

    fn resolve(&self, display_index: usize) -> Result<usize, TaskError> {
        source_index(self.tasks.tasks(), self.filter, display_index)
            .ok_or(TaskError::OutOfRange(display_index))
    }
}
