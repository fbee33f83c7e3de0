use clap::Parser;
use std::path::PathBuf;

/// Terminal dashboard for a team workspace server.
#[derive(Debug, Parser)]
#[command(name = "huddle", version, about)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Server base URL, overriding the config file.
    #[arg(long)]
    pub server: Option<String>,

    /// Conversation to show in the chat pane, overriding the config file.
    #[arg(long)]
    pub conversation: Option<i64>,
}
