//! Display-time filtering
//!
//! A `Filter` selects which tasks a renderer shows; it never changes the
//! stored collection. Both derivations here are pure functions over a task
//! slice. `source_index` is the inverse mapping a controller needs before it
//! can mutate: intents arrive carrying positions in the *visible* list, and
//! mutating by that position directly would hit whichever task happens to
//! share it in the unfiltered collection.

use crate::task::Task;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Only tasks with `completed == true`.
    Completed,
    /// Only tasks with `completed == false`.
    Pending,
}

impl Filter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Pending => !task.completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Pending => "pending",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "completed" => Ok(Filter::Completed),
            "pending" => Ok(Filter::Pending),
            _ => Err(format!(
                "Invalid filter '{}'. Valid options are: all, completed, pending",
                s
            )),
        }
    }
}

/// The subsequence of `tasks` the filter admits, relative order preserved.
pub fn visible(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect()
}

/// Translate a position in the visible subsequence back to the index in the
/// full collection. `None` when `display_index` is past the end of the
/// visible list.
pub fn source_index(tasks: &[Task], filter: Filter, display_index: usize) -> Option<usize> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| filter.matches(t))
        .nth(display_index)
        .map(|(i, _)| i)
}
