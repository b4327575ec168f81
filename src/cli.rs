//! Command-line interface for strictly_referee.

use clap::{Parser, Subcommand};
use strictly_referee::ReportFormat;
use strictly_verdict::{Board, DrawPolicy};

/// Strictly Referee - decides who won a tic-tac-toe board
#[derive(Parser, Debug)]
#[command(name = "strictly_referee")]
#[command(about = "Classifies tic-tac-toe boards as won, drawn or in progress", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a board and report its status
    Evaluate {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Cell values, row-major (e.g. "2,2,1,2,2,0,1,2,1")
        #[arg(short, long)]
        board: Option<Board>,

        /// Board side length (inferred from the board when omitted)
        #[arg(short, long)]
        size: Option<usize>,

        /// When a full board counts as a draw (per-line, after-scan)
        #[arg(long)]
        draw_policy: Option<DrawPolicy>,

        /// Output format (text, json)
        #[arg(short, long)]
        format: Option<ReportFormat>,
    },

    /// Print the winning line index sets for a board size
    Lines {
        /// Board side length
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,
    },
}
