//! Game rules for board evaluation.
//!
//! Pure functions over boards and projected lines. Rules are kept apart
//! from the scan order so the evaluator can compose them under either
//! draw policy.

pub mod draw;
pub mod win;

pub use draw::{DrawPolicy, is_full};
pub use win::line_winner;
