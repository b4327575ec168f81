//! Board evaluation: scanning lines and classifying the game.

use super::error::EvaluateError;
use super::lines::{LineKind, LineSet, Projection};
use super::rules::{DrawPolicy, is_full, line_winner};
use super::{Board, GameStatus};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Result of evaluating one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Evaluation {
    /// Classified game status.
    status: GameStatus,
    /// Board values along every line, in scan order.
    projections: Vec<Projection>,
    /// Lines scanned up to and including the one that decided the status.
    lines_examined: usize,
    /// The line that completed a win, if any.
    winning_line: Option<LineKind>,
    /// Policy the board was evaluated under.
    draw_policy: DrawPolicy,
}

/// Outcome of a single scan.
struct Verdict {
    status: GameStatus,
    lines_examined: usize,
    winning_line: Option<LineKind>,
}

/// Evaluates boards of one size under a fixed draw policy.
#[derive(Debug, Clone)]
pub struct Evaluator {
    lines: LineSet,
    policy: DrawPolicy,
}

impl Evaluator {
    /// Creates an evaluator for N×N boards.
    #[instrument]
    pub fn new(size: usize, policy: DrawPolicy) -> Result<Self, EvaluateError> {
        Ok(Self {
            lines: LineSet::new(size)?,
            policy,
        })
    }

    /// Returns the lines this evaluator scans.
    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    /// Returns the draw policy.
    pub fn policy(&self) -> DrawPolicy {
        self.policy
    }

    /// Classifies a board.
    ///
    /// The board must have the size this evaluator was built for.
    #[instrument(skip(self, board), fields(size = board.size(), policy = %self.policy))]
    pub fn evaluate(&self, board: &Board) -> Result<Evaluation, EvaluateError> {
        if board.size() != self.lines.size() {
            return Err(EvaluateError::SizeMismatch {
                board: board.size(),
                lines: self.lines.size(),
            });
        }

        Ok(self.classify(board))
    }

    fn classify(&self, board: &Board) -> Evaluation {
        let projections = self.lines.project_unchecked(board);
        let verdict = match self.policy {
            DrawPolicy::PerLine => scan_per_line(board, &projections),
            DrawPolicy::AfterScan => scan_after(board, &projections),
        };
        debug!(
            status = %verdict.status,
            lines_examined = verdict.lines_examined,
            "Board evaluated"
        );

        Evaluation {
            status: verdict.status,
            projections,
            lines_examined: verdict.lines_examined,
            winning_line: verdict.winning_line,
            draw_policy: self.policy,
        }
    }
}

/// Classifies a board with lines generated for its own size.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board, policy: DrawPolicy) -> Evaluation {
    let evaluator = Evaluator {
        lines: LineSet::for_board(board),
        policy,
    };
    evaluator.classify(board)
}

/// Fullness is checked before each line, so a full board stops the scan
/// at the first line whatever that line holds.
fn scan_per_line(board: &Board, projections: &[Projection]) -> Verdict {
    for (i, projection) in projections.iter().enumerate() {
        debug!(line = %projection.kind(), values = %projection.values(), "Scanning line");
        if is_full(board) {
            return Verdict {
                status: GameStatus::Draw,
                lines_examined: i + 1,
                winning_line: None,
            };
        }
        if let Some(player) = line_winner(projection.values()) {
            return Verdict {
                status: GameStatus::won_by(player),
                lines_examined: i + 1,
                winning_line: Some(*projection.kind()),
            };
        }
    }
    Verdict {
        status: GameStatus::InProgress,
        lines_examined: projections.len(),
        winning_line: None,
    }
}

fn scan_after(board: &Board, projections: &[Projection]) -> Verdict {
    for (i, projection) in projections.iter().enumerate() {
        debug!(line = %projection.kind(), values = %projection.values(), "Scanning line");
        if let Some(player) = line_winner(projection.values()) {
            return Verdict {
                status: GameStatus::won_by(player),
                lines_examined: i + 1,
                winning_line: Some(*projection.kind()),
            };
        }
    }
    let status = if !projections.is_empty() && is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    };
    Verdict {
        status,
        lines_examined: projections.len(),
        winning_line: None,
    }
}
