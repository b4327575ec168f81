//! Pure tic-tac-toe board evaluation.
//!
//! Generates the winning lines of an N×N board and classifies a board as
//! won, drawn or still in progress. Nothing here performs I/O; callers
//! render an [`Evaluation`] however they like.
//!
//! # Example
//!
//! ```
//! use strictly_verdict::{Board, DrawPolicy, GameStatus, evaluate};
//!
//! let board = Board::from_values(3, &[2, 2, 1, 2, 2, 0, 1, 2, 1]).unwrap();
//! let evaluation = evaluate(&board, DrawPolicy::PerLine);
//! assert_eq!(evaluation.status(), &GameStatus::Player2Wins);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod evaluate;
mod lines;
pub mod rules;
mod types;

pub use error::{BoardError, BoardErrorKind, EvaluateError};
pub use evaluate::{Evaluation, Evaluator, evaluate};
pub use lines::{Line, LineKind, LineSet, LineValues, Projection};
pub use rules::{DrawPolicy, is_full, line_winner};
pub use types::{Board, GameStatus, Player, Square};
