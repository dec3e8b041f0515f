//! Move application: relocation, upgrade, flip-capture
//!
//! After the mover lands, every adjacent enemy checker is flipped to the
//! mover's color. Flipped checkers keep their upgraded flag and are then
//! re-checked against the home base their new color counts as enemy
//! territory.

use crate::board::topology::{adjacent, in_enemy_home};
use crate::board::{Checker, Position, Vertex};

use super::movement::is_legal_move;

/// Upgrade `checker` if it stands in the enemy home base
#[inline]
fn promote(checker: &mut Checker, at: Vertex) {
    if in_enemy_home(at, checker.color) {
        checker.upgraded = true;
    }
}

/// Apply `from -> to` and return the resulting position.
///
/// The input is never modified. The side to move advances by one ply.
/// Legality is not checked; with no checker on `from` the input is
/// returned unchanged.
///
/// # Example
///
/// ```
/// use tarati::board::{Color, Position, Vertex};
/// use tarati::rules::apply_move;
///
/// let start = Position::initial();
/// let next = apply_move(&start, Vertex::C1, Vertex::B1);
/// assert!(next.is_empty(Vertex::C1));
/// assert_eq!(next.side_to_move(), Color::Black);
/// assert!(start.get(Vertex::C1).is_some());
/// ```
#[must_use]
pub fn apply_move(pos: &Position, from: Vertex, to: Vertex) -> Position {
    let mut next = *pos;
    let Some(mut mover) = next.remove(from) else {
        return next;
    };

    promote(&mut mover, to);
    next.place(to, mover);

    for v in adjacent(to).iter() {
        if let Some(checker) = next.get_mut(v) {
            if checker.color != mover.color {
                checker.color = mover.color;
                promote(checker, v);
            }
        }
    }

    next.set_side_to_move(pos.side_to_move().opponent());
    next
}

/// Validate and apply; `None` when the move is illegal
#[must_use]
pub fn try_apply_move(pos: &Position, from: Vertex, to: Vertex) -> Option<Position> {
    is_legal_move(pos, from, to).then(|| apply_move(pos, from, to))
}
