//! Strictly Referee library - configuration and reporting around board evaluation
//!
//! The board logic lives in [`strictly_verdict`]; this crate decides which
//! board to judge and writes the verdict.
//!
//! # Architecture
//!
//! - **Config**: board, size, draw policy and output format from TOML
//! - **Report**: text or JSON rendering, written once per run
//!
//! # Example
//!
//! ```
//! use strictly_referee::{RefereeConfig, ReportFormat, write_report};
//! use strictly_verdict::evaluate;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = RefereeConfig::default();
//! let board = config.build_board()?;
//! let evaluation = evaluate(&board, *config.draw_policy());
//!
//! let mut out = Vec::new();
//! write_report(&mut out, &board, &evaluation, ReportFormat::Text)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod report;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_BOARD, RefereeConfig};

// Crate-level exports - Reporting
pub use report::{ReportError, ReportFormat, write_lines, write_report};
