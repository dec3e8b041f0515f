//! Move legality
//!
//! A move is a single step along an edge onto an empty vertex by a checker
//! of the side to move. Non-upgraded checkers must also step forward (see
//! [`crate::board::topology`] for the row ranks that define "forward").

use crate::board::topology::{are_adjacent, is_forward};
use crate::board::{Position, Vertex};

/// Check whether `from -> to` is a legal move in `pos`.
///
/// Checks run in order and stop at the first failure: distinct endpoints,
/// an edge between them, a checker on `from`, nothing on `to`, the checker
/// belongs to the side to move, and (unless upgraded) the step goes forward.
/// Never panics; any malformed pair is simply `false`.
pub fn is_legal_move(pos: &Position, from: Vertex, to: Vertex) -> bool {
    if from == to || !are_adjacent(from, to) {
        return false;
    }

    let Some(checker) = pos.get(from) else {
        return false;
    };

    if !pos.is_empty(to) || checker.color != pos.side_to_move() {
        return false;
    }

    checker.upgraded || is_forward(from, to, checker.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Checker, Color};

    #[test]
    fn test_initial_white_moves() {
        let pos = Position::initial();
        assert!(is_legal_move(&pos, Vertex::C1, Vertex::B1));
        assert!(is_legal_move(&pos, Vertex::C2, Vertex::C3));
        assert!(is_legal_move(&pos, Vertex::C1, Vertex::C12));
    }

    #[test]
    fn test_same_vertex_rejected() {
        let pos = Position::initial();
        assert!(!is_legal_move(&pos, Vertex::C1, Vertex::C1));
    }

    #[test]
    fn test_non_adjacent_rejected() {
        let pos = Position::initial();
        assert!(!is_legal_move(&pos, Vertex::C1, Vertex::A1));
        assert!(!is_legal_move(&pos, Vertex::D1, Vertex::B1));
    }

    #[test]
    fn test_empty_source_rejected() {
        let pos = Position::initial();
        assert!(!is_legal_move(&pos, Vertex::B1, Vertex::A1));
    }

    #[test]
    fn test_occupied_destination_rejected() {
        let pos = Position::initial();
        // Adjacent, own color, forward: still blocked
        assert!(!is_legal_move(&pos, Vertex::D1, Vertex::C1));
        assert!(!is_legal_move(&pos, Vertex::D2, Vertex::C2));
    }

    #[test]
    fn test_wrong_side_rejected() {
        let pos = Position::initial();
        assert!(!is_legal_move(&pos, Vertex::C7, Vertex::B4));

        let mut black_turn = pos;
        black_turn.set_side_to_move(Color::Black);
        assert!(is_legal_move(&black_turn, Vertex::C7, Vertex::B4));
        assert!(!is_legal_move(&black_turn, Vertex::C1, Vertex::B1));
    }

    #[test]
    fn test_backward_and_sideways_rejected_unless_upgraded() {
        let mut pos = Position::empty(Color::White);
        pos.place(Vertex::B1, Checker::new(Color::White));
        pos.place(Vertex::C4, Checker::new(Color::White));

        // Backward
        assert!(!is_legal_move(&pos, Vertex::B1, Vertex::C1));
        assert!(!is_legal_move(&pos, Vertex::B1, Vertex::C2));
        // Sideways (same row)
        assert!(!is_legal_move(&pos, Vertex::C4, Vertex::B2));
        // Forward
        assert!(is_legal_move(&pos, Vertex::B1, Vertex::A1));
        assert!(is_legal_move(&pos, Vertex::C4, Vertex::C5));

        pos.place(Vertex::B1, Checker::upgraded(Color::White));
        pos.place(Vertex::C4, Checker::upgraded(Color::White));
        assert!(is_legal_move(&pos, Vertex::B1, Vertex::C1));
        assert!(is_legal_move(&pos, Vertex::C4, Vertex::B2));
        assert!(is_legal_move(&pos, Vertex::C4, Vertex::C3));
    }

    #[test]
    fn test_black_moves_downward() {
        let mut pos = Position::empty(Color::Black);
        pos.place(Vertex::A1, Checker::new(Color::Black));
        assert!(is_legal_move(&pos, Vertex::A1, Vertex::B1));
        assert!(is_legal_move(&pos, Vertex::A1, Vertex::B2));
        assert!(is_legal_move(&pos, Vertex::A1, Vertex::B6));
        assert!(!is_legal_move(&pos, Vertex::A1, Vertex::B3));
        assert!(!is_legal_move(&pos, Vertex::A1, Vertex::B4));
    }
}
