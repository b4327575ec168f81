//! Error types for board construction and evaluation.

use derive_more::{Display, Error};
use tracing::instrument;

/// The specific reason a board was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// Cell count does not equal `size * size`.
    #[display("expected {} cells for size {}, got {}", expected, size, actual)]
    LengthMismatch {
        /// Declared side length.
        size: usize,
        /// Required cell count.
        expected: usize,
        /// Cells actually supplied.
        actual: usize,
    },

    /// A cell value outside {0, 1, 2}.
    #[display("cell {} has value {} (expected 0, 1 or 2)", index, value)]
    InvalidCell {
        /// Row-major index of the offending cell.
        index: usize,
        /// The rejected value.
        value: u8,
    },

    /// A token in board text that is not a cell value.
    #[display("cannot parse cell {:?}", _0)]
    Unparsable(String),

    /// Cell count is not a perfect square, so no size can be inferred.
    #[display("{} cells do not form a square board", _0)]
    NotSquare(usize),

    /// `size * size` does not fit in `usize`.
    #[display("size {} is too large", _0)]
    TooLarge(usize),
}

/// Invalid board input with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid board: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// What was wrong with the board.
    pub kind: BoardErrorKind,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &BoardErrorKind {
        &self.kind
    }
}

/// Error raised when a board cannot be evaluated against a line set.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EvaluateError {
    /// The board and the line set were built for different sizes.
    #[display("board size {} does not match line set size {}", board, lines)]
    SizeMismatch {
        /// Side length of the board.
        board: usize,
        /// Side length the lines were generated for.
        lines: usize,
    },

    /// `size * size` does not fit in `usize`.
    #[display("size {} is too large to generate lines for", size)]
    TooLarge {
        /// Requested side length.
        size: usize,
    },
}
