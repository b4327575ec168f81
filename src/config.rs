//! Referee configuration: which board to judge and how to report it.

use crate::report::ReportFormat;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_verdict::{Board, BoardError, DrawPolicy};
use tracing::{debug, info, instrument};

/// Board used when none is configured (Player 2 holds the middle column).
pub const DEFAULT_BOARD: [u8; 9] = [2, 2, 1, 2, 2, 0, 1, 2, 1];

/// Configuration for one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct RefereeConfig {
    /// Side length. Inferred from the cell count when absent.
    #[setters(strip_option)]
    size: Option<usize>,

    /// Cell values in row-major order (0 empty, 1 and 2 for players).
    board: Vec<u8>,

    /// When a full board counts as a draw.
    draw_policy: DrawPolicy,

    /// Output format for the report.
    format: ReportFormat,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        Self {
            size: None,
            board: DEFAULT_BOARD.to_vec(),
            draw_policy: DrawPolicy::default(),
            format: ReportFormat::default(),
        }
    }
}

impl RefereeConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to [`RefereeConfig::default`]. Without a
    /// `size` key the side length is inferred from the board.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            size = ?config.size,
            cells = config.board.len(),
            draw_policy = %config.draw_policy,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    ///
    /// A board replaces the configured cells and carries its own size
    /// unless `size` is also given. A size on its own resizes the
    /// configured board.
    #[instrument(skip(self, board))]
    pub fn apply_overrides(
        self,
        board: Option<Board>,
        size: Option<usize>,
        draw_policy: Option<DrawPolicy>,
        format: Option<ReportFormat>,
    ) -> Self {
        let mut config = self;
        if let Some(board) = board {
            let inferred = board.size();
            config = config
                .with_board(board.values())
                .with_size(size.unwrap_or(inferred));
        } else if let Some(size) = size {
            config = config.with_size(size);
        }
        if let Some(policy) = draw_policy {
            config = config.with_draw_policy(policy);
        }
        if let Some(format) = format {
            config = config.with_format(format);
        }
        debug!(?config, "Applied overrides");
        config
    }

    /// Builds the configured board, validating size and cell values.
    #[instrument(skip(self))]
    pub fn build_board(&self) -> Result<Board, BoardError> {
        let size = match self.size {
            Some(size) => size,
            None => Board::infer_size(self.board.len())?,
        };
        Board::from_values(size, &self.board)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_verdict::BoardErrorKind;

    #[test]
    fn test_default_board_builds() {
        let board = RefereeConfig::default().build_board().unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.values(), DEFAULT_BOARD.to_vec());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = RefereeConfig::from_toml("").unwrap();
        assert_eq!(config, RefereeConfig::default());
    }

    #[test]
    fn test_board_without_size_is_inferred() {
        let config = RefereeConfig::from_toml("board = [1, 0, 0, 2]").unwrap();
        assert_eq!(config.size(), &None);
        assert_eq!(config.build_board().unwrap().size(), 2);
    }

    #[test]
    fn test_policy_and_format_keys() {
        let config =
            RefereeConfig::from_toml("draw_policy = \"after-scan\"\nformat = \"json\"").unwrap();
        assert_eq!(config.draw_policy(), &DrawPolicy::AfterScan);
        assert_eq!(config.format(), &ReportFormat::Json);
    }

    #[test]
    fn test_setters_override() {
        let config = RefereeConfig::default()
            .with_size(2)
            .with_board(vec![1, 1, 0, 2]);
        assert_eq!(config.build_board().unwrap().values(), vec![1, 1, 0, 2]);
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = RefereeConfig::default().apply_overrides(None, None, None, None);
        assert_eq!(config, RefereeConfig::default());
    }

    #[test]
    fn test_board_override_carries_its_size() {
        let board: Board = "1,0,0,2".parse().unwrap();
        let config = RefereeConfig::default().apply_overrides(Some(board), None, None, None);
        assert_eq!(config.size(), &Some(2));
        assert_eq!(config.build_board().unwrap().values(), vec![1, 0, 0, 2]);
    }

    #[test]
    fn test_board_override_with_conflicting_size() {
        let board: Board = "1,0,0,2".parse().unwrap();
        let config = RefereeConfig::default().apply_overrides(Some(board), Some(3), None, None);
        let err = config.build_board().unwrap_err();
        assert!(matches!(
            err.kind(),
            BoardErrorKind::LengthMismatch { expected: 9, actual: 4, .. }
        ));
    }

    #[test]
    fn test_size_override_on_default_board() {
        let config = RefereeConfig::default().apply_overrides(None, Some(3), None, None);
        assert_eq!(config.build_board().unwrap().values(), DEFAULT_BOARD.to_vec());

        let config = RefereeConfig::default().apply_overrides(None, Some(2), None, None);
        assert!(config.build_board().is_err());
    }

    #[test]
    fn test_policy_and_format_overrides() {
        let config = RefereeConfig::from_toml("draw_policy = \"after-scan\"")
            .unwrap()
            .apply_overrides(None, None, Some(DrawPolicy::PerLine), Some(ReportFormat::Json));
        assert_eq!(config.draw_policy(), &DrawPolicy::PerLine);
        assert_eq!(config.format(), &ReportFormat::Json);
    }

    #[test]
    fn test_overflowing_size_is_board_error() {
        let config = RefereeConfig::from_toml("size = 4294967296\nboard = []").unwrap();
        let err = config.build_board().unwrap_err();
        assert_eq!(err.kind(), &BoardErrorKind::TooLarge(4294967296));
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = RefereeConfig::from_toml("draw_policy = \"never\"").unwrap_err();
        assert!(err.to_string().starts_with("Config error: Failed to parse config"));
    }
}
