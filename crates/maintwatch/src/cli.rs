use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "maintwatch")]
#[command(version)]
#[command(about = "Watches for game-server maintenance announcements")]
pub struct Cli {
    /// Window store path (`.json` for a plain file, otherwise sqlite)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Offset in hours for the activity clock
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub display_offset: Option<i32>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll for announcements and refresh the activity line until Ctrl-C
    Run {
        /// Minutes between polls (overrides CHECK_FREQUENCY_IN_MINUTES)
        #[arg(long)]
        every: Option<u64>,

        /// Seconds between activity refreshes
        #[arg(long)]
        status_every: Option<u64>,
    },

    /// Run a single poll cycle and print the resulting window
    Check,

    /// Print the reply to a maintenance query for the stored window
    Status,

    /// Parse announcement text (argument or stdin) into a window
    Parse {
        /// Text to parse; read from stdin when omitted
        text: Option<String>,
    },

    /// Print version information
    Version,
}
