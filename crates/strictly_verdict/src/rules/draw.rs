//! Draw detection and the policy deciding when it is checked.

use super::super::{Board, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Checks if the board is full (no empty squares).
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// When the evaluator checks for a full board.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DrawPolicy {
    /// Fullness is checked before every line. A full board is reported
    /// as a draw on the first line scanned, even if it holds a win.
    #[default]
    PerLine,
    /// All lines are scanned for a win first; a full board without a win
    /// is a draw.
    AfterScan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::empty(3).unwrap()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_values(3, &[1, 2, 1, 2, 1, 2, 2, 1, 0]).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_values(3, &[1, 2, 1, 2, 1, 2, 2, 1, 2]).unwrap();
        assert!(is_full(&board));
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(DrawPolicy::default(), DrawPolicy::PerLine);
        assert_eq!(DrawPolicy::AfterScan.to_string(), "after-scan");
        assert_eq!("per-line".parse::<DrawPolicy>().unwrap(), DrawPolicy::PerLine);
        assert!("sometimes".parse::<DrawPolicy>().is_err());
    }
}
