//! CLI command definitions for the `quizbot` binary.

pub mod check;
pub mod play;
pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Timed quiz bot for Telegram.
#[derive(Parser)]
#[command(name = "quizbot", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding quizbot.toml, the question files and the answer logs.
    #[arg(long, global = true, env = "QUIZBOT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot.
    Serve {
        /// Telegram bot token.
        #[arg(long, env = "TELOXIDE_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// Take the quiz in this terminal.
    Play {
        /// Name used for the answer log file (defaults to $USER).
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Validate the configuration and question bank.
    Check,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
