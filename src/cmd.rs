//! Command implementations for the CLI interface.
//!
//! This module contains the command handlers for the scriptable surface:
//! the four remote task operations, the AI parse helper, and the TUI
//! launcher. Every handler talks to the same `ApiClient`/`Board` pair the
//! TUI uses.

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::api::{ApiClient, ApiError, TaskDraft};
use crate::board::{self, Board};
use crate::cli::Cli;
use crate::fields::{Filter, Priority};
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive board UI.
    Ui,

    /// List tasks with an optional view filter.
    List {
        /// View: all | pending | done. Applied client-side.
        #[arg(long, value_enum, default_value_t = Filter::All)]
        filter: Filter,
    },

    /// Add a new task.
    Add {
        /// Short title for the task.
        title: String,
        /// Optional longer notes.
        #[arg(long, default_value = "")]
        notes: String,
        /// Priority: 1 (high), 2 (medium) or 3 (low). Anything else means 2.
        #[arg(long)]
        priority: Option<String>,
    },

    /// Mark a task done.
    Done {
        /// Task ID to complete.
        id: u64,
    },

    /// Delete a task.
    Delete {
        /// Task ID to delete.
        id: u64,
    },

    /// Send free text to the AI parser and print the suggested fields.
    Parse {
        /// Free-form description of the task.
        text: String,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the terminal user interface.
pub fn cmd_ui(api_url: &str) {
    if let Err(e) = run_tui(api_url) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Fetch and print the task list, filtered client-side.
pub fn cmd_list(api: &ApiClient, filter: Filter) {
    let mut b = Board::new();
    b.filter = filter;
    if let Err(e) = b.reload(api) {
        fail(e);
    }
    board::print_table(&b.visible());
    let s = b.summary();
    println!("Total: {} | Pending: {} | Done: {}", s.total, s.pending, s.done);
}

/// Create a task on the server, then reload to confirm.
pub fn cmd_add(api: &ApiClient, title: String, notes: String, priority: Option<String>) {
    let title = title.trim().to_string();
    if title.is_empty() {
        eprintln!("Title cannot be empty.");
        std::process::exit(1);
    }

    let draft = TaskDraft {
        title: title.clone(),
        notes,
        priority: priority.as_deref().map(Priority::coerce).unwrap_or_default(),
    };

    let mut b = Board::new();
    match api.create(&draft).and_then(|r| r.apply(&mut b, api)) {
        Ok(()) => println!("Added '{}' ({} tasks on the board)", title, b.summary().total),
        Err(e) => fail(e),
    }
}

/// Request a completion transition for a task.
pub fn cmd_done(api: &ApiClient, id: u64) {
    let mut b = Board::new();
    match api.mark_done(id).and_then(|r| r.apply(&mut b, api)) {
        Ok(()) => println!("Task {id} marked done"),
        Err(e) => fail(e),
    }
}

/// Remove a task from the server.
pub fn cmd_delete(api: &ApiClient, id: u64) {
    let mut b = Board::new();
    match api.delete(id).and_then(|r| r.apply(&mut b, api)) {
        Ok(()) => println!("Deleted task {id}"),
        Err(e) => fail(e),
    }
}

/// Ask the AI endpoint for structured fields. Prints the suggestion only;
/// creating the task stays a separate, deliberate step.
pub fn cmd_parse(api: &ApiClient, text: String) {
    let text = text.trim().to_string();
    if text.is_empty() {
        eprintln!("Nothing to parse.");
        std::process::exit(1);
    }

    match api.parse_task(&text) {
        Ok(parsed) => {
            println!("Title:    {}", parsed.title);
            println!(
                "Notes:    {}",
                if parsed.notes.is_empty() { "-" } else { &parsed.notes }
            );
            println!("Priority: {}", board::format_priority(parsed.priority));
            println!();
            println!(
                "Create it with: tb add \"{}\" --priority {}",
                parsed.title,
                i64::from(parsed.priority)
            );
        }
        Err(e) => fail(e),
    }
}

/// Generate shell completion scripts for the specified shell.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

fn fail(e: ApiError) -> ! {
    eprintln!("{e}");
    std::process::exit(1);
}
