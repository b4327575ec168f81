//! Win detection for a single line.

use super::super::{LineValues, Player, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Returns the player occupying every square of the line, if any.
///
/// An empty line has no winner.
#[instrument]
pub fn line_winner(values: &LineValues) -> Option<Player> {
    if values.is_empty() {
        return None;
    }
    Player::iter().find(|&player| {
        values
            .squares()
            .iter()
            .all(|&square| square == Square::Occupied(player))
    })
}
