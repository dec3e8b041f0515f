//! Game-over detection
//!
//! The game ends when every checker on the board shares one color, or when
//! the side to move has no legal move. Pieces are never removed, so "losing
//! all pieces" means having every checker flipped.

use crate::board::{Color, Position};

use super::movegen::has_legal_move;

/// Check whether the game is over in `pos`
pub fn is_terminal(pos: &Position) -> bool {
    pos.sole_color().is_some() || !has_legal_move(pos)
}

/// Winner of a finished game, `None` while play continues.
///
/// With a single color left that color wins. Otherwise a side to move with
/// no legal move loses.
pub fn winner(pos: &Position) -> Option<Color> {
    if let Some(color) = pos.sole_color() {
        return Some(color);
    }
    if has_legal_move(pos) {
        None
    } else {
        Some(pos.side_to_move().opponent())
    }
}
