//! Board state and utility functions for the task list.
//!
//! This module provides the `Board` struct, the client's only state
//! container: the last full snapshot from `GET /tasks` plus the current
//! view filter, with derived projections recomputed on demand.

use crate::api::{ApiClient, ApiError};
use crate::fields::{Filter, Priority};
use crate::task::Task;

/// Counts shown under the task list. Recomputed from the snapshot on every
/// render, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub pending: usize,
    pub done: usize,
}

/// The client-side view of the board.
///
/// The snapshot is only ever replaced wholesale; no local patching or
/// reconciliation happens here. If a reload fails the previous snapshot
/// stays in place.
#[derive(Debug, Default)]
pub struct Board {
    tasks: Vec<Task>,
    pub filter: Filter,
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    /// Replace the snapshot with a fresh `GET /tasks`. On failure the old
    /// snapshot is untouched.
    pub fn reload(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        self.tasks = api.list()?;
        Ok(())
    }

    /// Swap in a snapshot directly. Everything outside tests goes through
    /// [`Board::reload`].
    pub(crate) fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// The full snapshot, server order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The current filter's projection of the snapshot, preserving relative
    /// order. Recomputed on demand, never stored.
    pub fn visible(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.admits(t)).collect()
    }

    pub fn summary(&self) -> Summary {
        let done = self.tasks.iter().filter(|t| t.done).count();
        Summary {
            total: self.tasks.len(),
            pending: self.tasks.len() - done,
            done,
        }
    }
}

/// Format a priority for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}

/// Format a completion flag for display.
pub fn format_done(done: bool) -> &'static str {
    if done {
        "Done"
    } else {
        "Pending"
    }
}

/// Print tasks in a formatted table.
pub fn print_table(tasks: &[&Task]) {
    println!(
        "{:<6} {:<8} {:<7} {:<40} {}",
        "ID", "Status", "Pri", "Title", "Notes"
    );
    for t in tasks {
        println!(
            "{:<6} {:<8} {:<7} {:<40} {}",
            t.id,
            format_done(t.done),
            format_priority(t.priority),
            truncate(&t.title, 40),
            truncate(&t.notes, 30),
        );
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, done: bool) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            notes: String::new(),
            priority: Priority::Medium,
            done,
        }
    }

    fn board_with(tasks: Vec<Task>) -> Board {
        let mut board = Board::new();
        board.replace(tasks);
        board
    }

    #[test]
    fn test_pending_filter_is_order_preserving_subset() {
        let mut board = board_with(vec![task(3, false), task(1, true), task(2, false)]);
        board.filter = Filter::Pending;
        let ids: Vec<u64> = board.visible().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_done_filter_is_the_complement() {
        let mut board = board_with(vec![task(3, false), task(1, true), task(2, false)]);
        board.filter = Filter::Done;
        let ids: Vec<u64> = board.visible().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_all_filter_returns_snapshot_unchanged() {
        let board = board_with(vec![task(9, true), task(4, false)]);
        let ids: Vec<u64> = board.visible().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![9, 4]);
    }

    #[test]
    fn test_summary_counts_always_add_up() {
        for done_flags in [vec![], vec![true], vec![false, true, true, false]] {
            let tasks = done_flags
                .iter()
                .enumerate()
                .map(|(i, &d)| task(i as u64, d))
                .collect();
            let board = board_with(tasks);
            let s = board.summary();
            assert_eq!(s.total, s.pending + s.done);
        }
    }

    #[test]
    fn test_replace_is_wholesale_not_a_patch() {
        // A reload shows whatever the server said, even when that disagrees
        // with what a naive local patch would have produced.
        let mut board = board_with(vec![task(1, false), task(2, false)]);
        board.replace(vec![task(5, true)]);
        let ids: Vec<u64> = board.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5]);
        assert_eq!(board.summary().done, 1);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly-10", 10), "exactly-10");
        assert_eq!(truncate("a-very-long-title", 10), "a-very-lo…");
    }
}
