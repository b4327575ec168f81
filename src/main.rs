//! Strictly Referee - Unified CLI
//!
//! Evaluates a tic-tac-toe board and reports the verdict.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_referee::{RefereeConfig, ReportFormat, write_lines, write_report};
use strictly_verdict::{Board, DrawPolicy, Evaluator, LineSet};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Evaluate {
            config,
            board,
            size,
            draw_policy,
            format,
        } => run_evaluate(config, board, size, draw_policy, format),
        Command::Lines { size, format } => run_lines(size, format),
    }
}

/// Evaluate a board from config and flags, then report once
#[instrument(skip(board))]
fn run_evaluate(
    config_path: Option<PathBuf>,
    board: Option<Board>,
    size: Option<usize>,
    draw_policy: Option<DrawPolicy>,
    format: Option<ReportFormat>,
) -> Result<()> {
    let config = match &config_path {
        Some(path) => RefereeConfig::from_file(path)?,
        None => RefereeConfig::default(),
    }
    .apply_overrides(board, size, draw_policy, format);

    let board = config.build_board()?;
    info!(size = board.size(), draw_policy = %config.draw_policy(), "Evaluating board");

    let evaluator = Evaluator::new(board.size(), *config.draw_policy())?;
    let evaluation = evaluator.evaluate(&board)?;
    info!(status = %evaluation.status(), "Verdict reached");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &board, &evaluation, *config.format())
        .context("Failed to report verdict")?;

    Ok(())
}

/// Print the winning lines for a board size
#[instrument]
fn run_lines(size: usize, format: ReportFormat) -> Result<()> {
    let lines = LineSet::new(size)?;
    info!(count = lines.len(), "Generated winning lines");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_lines(&mut out, &lines, format)?;

    Ok(())
}
