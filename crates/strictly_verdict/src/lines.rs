//! Winning line generation and board projection.
//!
//! An N×N board has `2N + 2` candidate lines: every row, every column and
//! the two diagonals. Lines are always produced in the same order (rows top
//! to bottom, columns left to right, main diagonal, anti-diagonal), which is
//! the order the evaluator scans them in.

use super::error::EvaluateError;
use super::{Board, Square};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Which row, column or diagonal a line covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum LineKind {
    /// Row `i`, counted from the top.
    #[display("row {}", _0)]
    Row(usize),
    /// Column `i`, counted from the left.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// A candidate winning line: the board indices it covers, in line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Line {
    /// Which line this is.
    kind: LineKind,
    /// Row-major board indices.
    indices: Vec<usize>,
}

impl Line {
    /// Reads the board values at this line's indices, preserving line order.
    ///
    /// The board must have the size the line was generated for.
    fn project(&self, board: &Board) -> Projection {
        let squares = board.squares();
        let values = self.indices.iter().map(|&index| squares[index]).collect();
        Projection {
            kind: self.kind,
            values: LineValues(values),
        }
    }
}

/// Board values along one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LineValues(Vec<Square>);

impl LineValues {
    /// Returns the squares in line order.
    pub fn squares(&self) -> &[Square] {
        &self.0
    }

    /// Returns the squares as cell values.
    pub fn values(&self) -> Vec<u8> {
        self.0.iter().map(|s| s.value()).collect()
    }

    /// Number of squares on the line.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the line has no squares.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Square>> for LineValues {
    fn from(squares: Vec<Square>) -> Self {
        Self(squares)
    }
}

impl std::fmt::Display for LineValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = self
            .0
            .iter()
            .map(|s| s.value().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]", values)
    }
}

/// A line together with the board values read along it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Projection {
    /// Which line was read.
    kind: LineKind,
    /// Values along the line.
    values: LineValues,
}

/// Every candidate winning line for one board size, in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSet {
    size: usize,
    lines: Vec<Line>,
}

impl LineSet {
    /// Generates the lines for an N×N board.
    ///
    /// Size 0 yields no lines at all. Fails when `size * size` does not fit
    /// in `usize`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, EvaluateError> {
        if size.checked_mul(size).is_none() {
            return Err(EvaluateError::TooLarge { size });
        }
        Ok(Self::generate(size))
    }

    /// Generates the lines matching a board's size.
    ///
    /// A board always holds `size * size` cells, so its size never overflows.
    pub(crate) fn for_board(board: &Board) -> Self {
        Self::generate(board.size())
    }

    fn generate(size: usize) -> Self {
        if size == 0 {
            return Self {
                size,
                lines: Vec::new(),
            };
        }

        let rows = (0..size).map(|i| Line {
            kind: LineKind::Row(i),
            indices: (0..size).map(|j| i * size + j).collect(),
        });
        let columns = (0..size).map(|i| Line {
            kind: LineKind::Column(i),
            indices: (0..size).map(|j| i + j * size).collect(),
        });
        let main = Line {
            kind: LineKind::MainDiagonal,
            indices: (0..size).map(|i| i * (size + 1)).collect(),
        };
        let anti = Line {
            kind: LineKind::AntiDiagonal,
            indices: (0..size).map(|i| (size - 1) + i * (size - 1)).collect(),
        };

        let lines = rows
            .chain(columns)
            .chain([main, anti])
            .collect::<Vec<_>>();
        tracing::trace!(count = lines.len(), "Generated lines");
        Self { size, lines }
    }

    /// Side length the lines were generated for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the lines in scan order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Iterates the lines in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Number of lines (`2 * size + 2`, or 0 for size 0).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Projects a board onto every line, in scan order.
    ///
    /// Fails if the board was not built for this line set's size.
    #[instrument(skip_all, fields(size = self.size))]
    pub fn project(&self, board: &Board) -> Result<Vec<Projection>, EvaluateError> {
        if board.size() != self.size {
            return Err(EvaluateError::SizeMismatch {
                board: board.size(),
                lines: self.size,
            });
        }
        Ok(self.project_unchecked(board))
    }

    /// Projects a board already known to match this line set's size.
    pub(crate) fn project_unchecked(&self, board: &Board) -> Vec<Projection> {
        self.lines.iter().map(|line| line.project(board)).collect()
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
