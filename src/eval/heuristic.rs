//! Static evaluation of Tarati positions
//!
//! Material plus an upgrade bonus, from White's point of view: positive
//! favors White, negative favors Black. Finished games score
//! `±WINNING_SCORE` regardless of material.

use crate::board::{Color, Position};
use crate::rules::winner;

use super::weights::Weights;

/// Material of one color in half-points
fn material_halves(pos: &Position, color: Color) -> i32 {
    pos.checkers()
        .filter(|(_, c)| c.color == color)
        .map(|(_, c)| {
            if c.upgraded {
                Weights::UPGRADED_HALVES
            } else {
                Weights::PLAIN_HALVES
            }
        })
        .sum()
}

/// Evaluate `pos` from White's point of view.
///
/// # Example
///
/// ```
/// use tarati::board::Position;
/// use tarati::eval::evaluate;
///
/// assert_eq!(evaluate(&Position::initial()), 0);
/// ```
#[must_use]
pub fn evaluate(pos: &Position) -> i32 {
    if let Some(color) = winner(pos) {
        return match color {
            Color::White => Weights::WINNING_SCORE,
            Color::Black => -Weights::WINNING_SCORE,
        };
    }
    material_score(pos)
}

/// Material and upgrade terms only, ignoring game end
#[must_use]
pub fn material_score(pos: &Position) -> i32 {
    let halves = material_halves(pos, Color::White) - material_halves(pos, Color::Black);
    let upgrades = pos.upgraded_count(Color::White) as i32 - pos.upgraded_count(Color::Black) as i32;
    Weights::PIECE * halves + Weights::UPGRADE * upgrades
}

/// Signed checker count (White minus Black); cheap score for move ordering
#[inline]
#[must_use]
pub fn material_balance(pos: &Position) -> i32 {
    pos.count(Color::White) as i32 - pos.count(Color::Black) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Checker, Vertex};
    use crate::rules::apply_move;

    #[test]
    fn test_initial_is_balanced() {
        let pos = Position::initial();
        assert_eq!(evaluate(&pos), 0);
        assert_eq!(material_balance(&pos), 0);
    }

    #[test]
    fn test_material_weights() {
        let mut pos = Position::empty(Color::White);
        pos.place(Vertex::C1, Checker::new(Color::White));
        pos.place(Vertex::C2, Checker::new(Color::White));
        pos.place(Vertex::C7, Checker::new(Color::Black));
        // One extra unupgraded checker = 2 half-points
        assert_eq!(material_score(&pos), 97 * 2);

        pos.place(Vertex::C2, Checker::upgraded(Color::White));
        // 5 - 2 half-points, plus one upgrade
        assert_eq!(material_score(&pos), 97 * 3 + 234);
        assert_eq!(material_balance(&pos), 1);
    }

    #[test]
    fn test_symmetric() {
        let mut pos = Position::empty(Color::White);
        pos.place(Vertex::B1, Checker::upgraded(Color::White));
        pos.place(Vertex::C3, Checker::new(Color::White));
        pos.place(Vertex::B4, Checker::new(Color::Black));

        let mut swapped = Position::empty(Color::White);
        for (v, c) in pos.checkers() {
            swapped.place(v, Checker { color: c.color.opponent(), ..c });
        }
        assert_eq!(material_score(&pos), -material_score(&swapped));
    }

    #[test]
    fn test_terminal_scores() {
        let mut pos = Position::empty(Color::Black);
        pos.place(Vertex::A1, Checker::new(Color::White));
        assert_eq!(evaluate(&pos), Weights::WINNING_SCORE);

        let mut pos = Position::empty(Color::White);
        pos.place(Vertex::A1, Checker::new(Color::Black));
        pos.place(Vertex::B2, Checker::upgraded(Color::Black));
        assert_eq!(evaluate(&pos), -Weights::WINNING_SCORE);

        // White to move but stuck on Black's home edge: Black wins
        let mut pos = Position::empty(Color::White);
        pos.place(Vertex::D3, Checker::new(Color::White));
        pos.place(Vertex::A1, Checker::new(Color::Black));
        assert_eq!(evaluate(&pos), -Weights::WINNING_SCORE);
    }

    #[test]
    fn test_capture_swings_score() {
        let mut pos = Position::empty(Color::White);
        pos.place(Vertex::B1, Checker::new(Color::White));
        pos.place(Vertex::C3, Checker::new(Color::White));
        pos.place(Vertex::B2, Checker::new(Color::Black));
        pos.place(Vertex::B3, Checker::new(Color::Black));
        pos.place(Vertex::C6, Checker::new(Color::Black));
        assert_eq!(material_balance(&pos), -1);

        let next = apply_move(&pos, Vertex::B1, Vertex::A1);
        assert_eq!(material_balance(&next), 3);
        assert!(evaluate(&next) > evaluate(&pos));
    }
}
