//! Core domain types for board evaluation.

use crate::error::{BoardError, BoardErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Player {
    /// Player 1, stored as cell value `1`.
    #[strum(to_string = "Player 1")]
    One,
    /// Player 2, stored as cell value `2`.
    #[strum(to_string = "Player 2")]
    Two,
}

impl Player {
    /// Returns the cell value that marks this player.
    pub fn value(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Square {
    /// Empty square (value `0`).
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Decodes a cell value, returning `None` outside {0, 1, 2}.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Square::Empty),
            1 => Some(Square::Occupied(Player::One)),
            2 => Some(Square::Occupied(Player::Two)),
            _ => None,
        }
    }

    /// Encodes the square as its cell value.
    pub fn value(self) -> u8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(player) => player.value(),
        }
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> Self {
        square.value()
    }
}

/// Square N×N board, stored row-major.
///
/// Index `r * size + c` holds the square at row `r`, column `c`. A board
/// always holds exactly `size * size` squares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Side length.
    size: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board of the given side length.
    #[track_caller]
    #[instrument]
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        let cells = Self::cell_count(size)?;
        Ok(Self {
            size,
            squares: vec![Square::Empty; cells],
        })
    }

    /// Creates a board from squares, checking the cell count.
    #[track_caller]
    #[instrument(skip(squares), fields(cells = squares.len()))]
    pub fn new(size: usize, squares: Vec<Square>) -> Result<Self, BoardError> {
        let expected = Self::cell_count(size)?;
        if squares.len() != expected {
            return Err(BoardError::new(BoardErrorKind::LengthMismatch {
                size,
                expected,
                actual: squares.len(),
            }));
        }
        Ok(Self { size, squares })
    }

    /// Number of cells on a board of side `size`.
    #[track_caller]
    fn cell_count(size: usize) -> Result<usize, BoardError> {
        match size.checked_mul(size) {
            Some(cells) => Ok(cells),
            None => Err(BoardError::new(BoardErrorKind::TooLarge(size))),
        }
    }

    /// Creates a board from raw cell values (0 empty, 1 and 2 for players).
    #[track_caller]
    #[instrument(skip(values), fields(cells = values.len()))]
    pub fn from_values(size: usize, values: &[u8]) -> Result<Self, BoardError> {
        let mut squares = Vec::with_capacity(values.len());
        for (index, &value) in values.iter().enumerate() {
            match Square::from_value(value) {
                Some(square) => squares.push(square),
                None => {
                    return Err(BoardError::new(BoardErrorKind::InvalidCell { index, value }));
                }
            }
        }
        Self::new(size, squares)
    }

    /// Infers the side length from a cell count.
    ///
    /// Fails unless `cells` is a perfect square.
    #[track_caller]
    #[instrument]
    pub fn infer_size(cells: usize) -> Result<usize, BoardError> {
        let mut size: usize = 0;
        while size.checked_mul(size).is_some_and(|square| square < cells) {
            size += 1;
        }
        if size.checked_mul(size) == Some(cells) {
            Ok(size)
        } else {
            Err(BoardError::new(BoardErrorKind::NotSquare(cells)))
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns all squares as cell values.
    pub fn values(&self) -> Vec<u8> {
        self.squares.iter().map(|s| s.value()).collect()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses cell values separated by commas, whitespace or `/`.
    ///
    /// The side length is inferred from the number of cells.
    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|token| !token.is_empty());
        let mut values = Vec::new();
        for token in tokens {
            match token.parse::<u8>() {
                Ok(value) => values.push(value),
                Err(_) => {
                    return Err(BoardError::new(BoardErrorKind::Unparsable(token.to_string())));
                }
            }
        }
        let size = Self::infer_size(values.len())?;
        Self::from_values(size, &values)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.size].join("+");
        for (row, cells) in self.squares.chunks(self.size.max(1)).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{}", separator)?;
            }
            let symbols = cells
                .iter()
                .map(|square| match square {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(player) => player.value().to_string(),
                })
                .collect::<Vec<_>>();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}

/// Classified state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// No terminal condition found.
    #[display("Game is Still on")]
    InProgress,
    /// The board has no empty squares left.
    #[display("It's a Draw (no more empty fields)")]
    Draw,
    /// Player 1 completed a line.
    #[display("Player 1 Won")]
    Player1Wins,
    /// Player 2 completed a line.
    #[display("Player 2 Won")]
    Player2Wins,
}

impl GameStatus {
    /// Returns the winning status for a player.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::One => GameStatus::Player1Wins,
            Player::Two => GameStatus::Player2Wins,
        }
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Player1Wins => Some(Player::One),
            GameStatus::Player2Wins => Some(Player::Two),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Whether the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_row_major() {
        let board = Board::from_values(3, &[1, 0, 0, 0, 2, 0, 0, 0, 0]).unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Player::One)));
        assert_eq!(board.get(4), Some(Square::Occupied(Player::Two)));
        assert!(board.is_empty(8));
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = Board::from_values(3, &[0, 0, 0]).unwrap_err();
        assert_eq!(
            err.kind(),
            &BoardErrorKind::LengthMismatch {
                size: 3,
                expected: 9,
                actual: 3
            }
        );
    }

    #[test]
    fn test_rejects_invalid_cell() {
        let err = Board::from_values(2, &[0, 1, 3, 2]).unwrap_err();
        assert_eq!(err.kind(), &BoardErrorKind::InvalidCell { index: 2, value: 3 });
        assert!(err.to_string().starts_with("Invalid board:"));
    }

    #[test]
    fn test_rejects_overflowing_size() {
        let err = Board::from_values(1usize << 32, &[]).unwrap_err();
        assert_eq!(err.kind(), &BoardErrorKind::TooLarge(1 << 32));

        let err = Board::empty(usize::MAX).unwrap_err();
        assert_eq!(err.kind(), &BoardErrorKind::TooLarge(usize::MAX));
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty(3).unwrap();
        assert_eq!(board.squares().len(), 9);
        assert!(board.is_empty(8));
    }

    #[test]
    fn test_parse_infers_size() {
        let board: Board = "2,2,1, 2,2,0, 1,2,1".parse().unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.values(), vec![2, 2, 1, 2, 2, 0, 1, 2, 1]);

        let board: Board = "1 2/0 1".parse().unwrap();
        assert_eq!(board.size(), 2);
        assert_eq!(board.values(), vec![1, 2, 0, 1]);
    }

    #[test]
    fn test_parse_rejects_non_square() {
        let err = "1,2,0".parse::<Board>().unwrap_err();
        assert_eq!(err.kind(), &BoardErrorKind::NotSquare(3));

        let err = "1,x,0,0".parse::<Board>().unwrap_err();
        assert_eq!(err.kind(), &BoardErrorKind::Unparsable("x".to_string()));
    }

    #[test]
    fn test_display_grid() {
        let board = Board::from_values(2, &[1, 0, 0, 2]).unwrap();
        assert_eq!(board.to_string(), "1|.\n-+-\n.|2");
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(GameStatus::InProgress.to_string(), "Game is Still on");
        assert_eq!(
            GameStatus::Draw.to_string(),
            "It's a Draw (no more empty fields)"
        );
        assert_eq!(GameStatus::Player1Wins.to_string(), "Player 1 Won");
        assert_eq!(GameStatus::Player2Wins.to_string(), "Player 2 Won");
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::won_by(Player::Two), GameStatus::Player2Wins);
        assert_eq!(GameStatus::Player1Wins.winner(), Some(Player::One));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Draw.is_over());
    }
}
