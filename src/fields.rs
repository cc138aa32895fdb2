//! Field types shared across the CLI, TUI, and wire format.
//!
//! This module defines the structured values attached to tasks (priority)
//! and the client-side view selector used to filter the board.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Task priority, carried as a bare integer on the wire
/// (1 = high, 2 = medium, 3 = low).
///
/// The server is the authority on these values but is not trusted to stay
/// in range: anything other than 1 or 3 decodes to `Medium`, which is also
/// the default for an absent field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl From<i64> for Priority {
    fn from(n: i64) -> Self {
        match n {
            1 => Priority::High,
            3 => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

impl From<Priority> for i64 {
    fn from(p: Priority) -> i64 {
        match p {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl Priority {
    /// Coerce free-text input to a priority. Anything that does not parse
    /// as an integer goes to `Medium`, same as out-of-range values.
    pub fn coerce(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .map(Priority::from)
            .unwrap_or_default()
    }
}

/// Client-side view selector. A pure projection over the task snapshot;
/// it never mutates the underlying data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Done,
}

impl Filter {
    /// Whether a task belongs to this view.
    pub fn admits(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.done,
            Filter::Done => task.done,
        }
    }

    /// Cycle to the next view, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Pending,
            Filter::Pending => Filter::Done,
            Filter::Done => Filter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Done => "Done",
        }
    }
}
