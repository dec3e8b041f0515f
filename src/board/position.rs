//! Position value: checker placement plus side to move

use serde::{Deserialize, Serialize};

use super::persist::PersistedPosition;
use super::{Checker, Color, Vertex, VertexSet, NUM_VERTICES};

/// Game position.
///
/// A plain `Copy` value: applying a move builds a new `Position` and never
/// touches the one it came from, so keeping old positions around is all
/// history/undo needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PersistedPosition", into = "PersistedPosition")]
pub struct Position {
    checkers: [Option<Checker>; NUM_VERTICES],
    side_to_move: Color,
}

impl Position {
    /// Empty board with `side_to_move` to play
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            checkers: [None; NUM_VERTICES],
            side_to_move,
        }
    }

    /// Starting layout: four unupgraded checkers per side on their home base, White to move
    pub fn initial() -> Self {
        let mut pos = Self::empty(Color::White);
        for color in [Color::White, Color::Black] {
            for v in super::home_base(color).iter() {
                pos.place(v, Checker::new(color));
            }
        }
        pos
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Get checker at vertex
    #[inline]
    pub fn get(&self, v: Vertex) -> Option<Checker> {
        self.checkers[v.to_index()]
    }

    #[inline]
    pub fn is_empty(&self, v: Vertex) -> bool {
        self.checkers[v.to_index()].is_none()
    }

    /// Put a checker on a vertex, replacing whatever was there
    #[inline]
    pub fn place(&mut self, v: Vertex, checker: Checker) {
        self.checkers[v.to_index()] = Some(checker);
    }

    /// Take the checker off a vertex
    #[inline]
    pub fn remove(&mut self, v: Vertex) -> Option<Checker> {
        self.checkers[v.to_index()].take()
    }

    /// Mutable access for in-place recoloring/upgrading
    #[inline]
    pub(crate) fn get_mut(&mut self, v: Vertex) -> Option<&mut Checker> {
        self.checkers[v.to_index()].as_mut()
    }

    /// Occupied vertices with their checkers, in canonical order
    pub fn checkers(&self) -> impl Iterator<Item = (Vertex, Checker)> + '_ {
        self.checkers
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|c| (Vertex::from_index(i), c)))
    }

    /// Vertices holding a checker of `color`
    pub fn occupied_by(&self, color: Color) -> VertexSet {
        self.checkers()
            .filter(|(_, c)| c.color == color)
            .map(|(v, _)| v)
            .collect()
    }

    /// Total checkers on board
    pub fn checker_count(&self) -> usize {
        self.checkers.iter().flatten().count()
    }

    /// Checkers of one color
    pub fn count(&self, color: Color) -> usize {
        self.checkers.iter().flatten().filter(|c| c.color == color).count()
    }

    /// Upgraded checkers of one color
    pub fn upgraded_count(&self, color: Color) -> usize {
        self.checkers
            .iter()
            .flatten()
            .filter(|c| c.color == color && c.upgraded)
            .count()
    }

    /// The one color present on the board, if every checker shares it
    pub fn sole_color(&self) -> Option<Color> {
        let white = self.count(Color::White);
        let black = self.count(Color::Black);
        match (white, black) {
            (w, 0) if w > 0 => Some(Color::White),
            (0, b) if b > 0 => Some(Color::Black),
            _ => None,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}
