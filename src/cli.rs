use clap::Parser;

use crate::cmd::Commands;

/// Terminal client for a task-board HTTP API.
/// The server defaults to http://localhost:8000 or a URL passed via --api.
#[derive(Parser)]
#[command(name = "tb", version, about = "Task board terminal client")]
pub struct Cli {
    /// Base URL of the task-board API.
    #[arg(long, global = true)]
    pub api: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
