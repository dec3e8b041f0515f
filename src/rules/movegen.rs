//! Legal move enumeration

use crate::board::topology::adjacent;
use crate::board::{Move, Position, Vertex};

use super::movement::is_legal_move;

/// Legal moves of the checker on `from`, destinations in canonical order
pub fn legal_moves_from(pos: &Position, from: Vertex) -> Vec<Move> {
    adjacent(from)
        .iter()
        .filter(|&to| is_legal_move(pos, from, to))
        .map(|to| Move::new(from, to))
        .collect()
}

/// All legal moves for the side to move.
///
/// Ordered by source vertex then destination vertex, both in canonical
/// order, so the result is fully deterministic.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(16);
    for from in pos.occupied_by(pos.side_to_move()).iter() {
        moves.extend(
            adjacent(from)
                .iter()
                .filter(|&to| is_legal_move(pos, from, to))
                .map(|to| Move::new(from, to)),
        );
    }
    moves
}

/// Check whether the side to move has at least one legal move
pub fn has_legal_move(pos: &Position) -> bool {
    pos.occupied_by(pos.side_to_move())
        .iter()
        .any(|from| adjacent(from).iter().any(|to| is_legal_move(pos, from, to)))
}
