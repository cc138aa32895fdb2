//! # TB - Task Board terminal client
//!
//! A terminal client for a remote task-board HTTP API, with a scriptable
//! CLI and an interactive TUI.
//!
//! ## Key Features
//!
//! - **Board TUI**: task list with all/pending/done views, a create form,
//!   and live summary counts
//! - **AI capture**: free text goes to the server's parse endpoint and
//!   comes back as a pre-filled task form for review
//! - **Scriptable CLI**: `list`, `add`, `done`, `delete`, and `parse`
//!   subcommands for automation
//! - **Server-authoritative**: every mutation is followed by a full reload;
//!   the client never patches its copy of the list
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the board UI against http://localhost:8000
//! tb
//!
//! # Point at a different server
//! tb --api https://tasks.example.com ui
//!
//! # Add a task via CLI
//! tb add "Buy milk" --priority 1
//!
//! # Turn free text into a task suggestion
//! tb parse "remind me to call mum on friday, not urgent"
//!
//! # List pending tasks
//! tb list --filter pending
//! ```
//!
//! There is no local storage: the remote service owns all tasks and the
//! client holds only a transient snapshot of the last successful list fetch.

use clap::Parser;

pub mod api;
pub mod board;
pub mod cli;
pub mod cmd;
pub mod fields;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use api::{ApiClient, DEFAULT_API_URL};
use cli::Cli;
use cmd::*;

fn main() {
    let cli = Cli::parse();

    let api_url = cli.api.unwrap_or_else(|| DEFAULT_API_URL.to_string());

    // No subcommand means the board UI, like the original single-page app.
    let command = cli.command.unwrap_or(Commands::Ui);

    match command {
        Commands::Ui => cmd_ui(&api_url),
        Commands::Completions { shell } => cmd_completions(shell),
        Commands::List { filter } => cmd_list(&ApiClient::new(&api_url), filter),
        Commands::Add { title, notes, priority } => {
            cmd_add(&ApiClient::new(&api_url), title, notes, priority)
        }
        Commands::Done { id } => cmd_done(&ApiClient::new(&api_url), id),
        Commands::Delete { id } => cmd_delete(&ApiClient::new(&api_url), id),
        Commands::Parse { text } => cmd_parse(&ApiClient::new(&api_url), text),
    }
}
