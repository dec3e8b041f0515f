//! Board representation for Tarati

pub mod bitboard;
pub mod persist;
pub mod position;
pub mod topology;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TaratiError;

// Re-exports
pub use bitboard::VertexSet;
pub use position::Position;
pub use topology::{adjacent, are_adjacent, home_base, row, EDGES};

/// Number of vertices on the board
pub const NUM_VERTICES: usize = 23;

/// Number of edges on the board
pub const NUM_EDGES: usize = 42;

/// Checkers each side starts with
pub const CHECKERS_PER_SIDE: usize = 4;

/// Vertex names in canonical order
const NAMES: [&str; NUM_VERTICES] = [
    "A1", // Center
    "B1", "B2", "B3", "B4", "B5", "B6", // Boundary
    "C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8", "C9", "C10", "C11", "C12", // Circumference
    "D1", "D2", "D3", "D4", // Domestic
];

/// Checker colors. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Color::White => "WHITE",
            Color::Black => "BLACK",
        })
    }
}

/// Topological layer of a vertex, innermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ring {
    Center,
    Boundary,
    Circumference,
    Domestic,
}

/// A vertex of the board graph.
///
/// Identity only: the index is the vertex's place in canonical order
/// (`A1`, `B1..B6`, `C1..C12`, `D1..D4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex(u8);

impl Vertex {
    pub const A1: Vertex = Vertex(0);
    pub const B1: Vertex = Vertex(1);
    pub const B2: Vertex = Vertex(2);
    pub const B3: Vertex = Vertex(3);
    pub const B4: Vertex = Vertex(4);
    pub const B5: Vertex = Vertex(5);
    pub const B6: Vertex = Vertex(6);
    pub const C1: Vertex = Vertex(7);
    pub const C2: Vertex = Vertex(8);
    pub const C3: Vertex = Vertex(9);
    pub const C4: Vertex = Vertex(10);
    pub const C5: Vertex = Vertex(11);
    pub const C6: Vertex = Vertex(12);
    pub const C7: Vertex = Vertex(13);
    pub const C8: Vertex = Vertex(14);
    pub const C9: Vertex = Vertex(15);
    pub const C10: Vertex = Vertex(16);
    pub const C11: Vertex = Vertex(17);
    pub const C12: Vertex = Vertex(18);
    pub const D1: Vertex = Vertex(19);
    pub const D2: Vertex = Vertex(20);
    pub const D3: Vertex = Vertex(21);
    pub const D4: Vertex = Vertex(22);

    #[inline]
    pub fn to_index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < NUM_VERTICES);
        Self(idx as u8)
    }

    /// All vertices in canonical order
    pub fn all() -> impl Iterator<Item = Vertex> {
        (0..NUM_VERTICES).map(Vertex::from_index)
    }

    #[inline]
    pub fn name(self) -> &'static str {
        NAMES[self.to_index()]
    }

    pub fn ring(self) -> Ring {
        match self.0 {
            0 => Ring::Center,
            1..=6 => Ring::Boundary,
            7..=18 => Ring::Circumference,
            _ => Ring::Domestic,
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Vertex {
    type Err = TaratiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        NAMES
            .iter()
            .position(|name| *name == upper)
            .map(Vertex::from_index)
            .ok_or_else(|| TaratiError::InvalidVertex(s.to_string()))
    }
}

impl Serialize for Vertex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Vertex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// A checker. Pieces are never removed, only moved or recolored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checker {
    pub color: Color,
    #[serde(rename = "isUpgraded")]
    pub upgraded: bool,
}

impl Checker {
    #[inline]
    pub fn new(color: Color) -> Self {
        Self { color, upgraded: false }
    }

    #[inline]
    pub fn upgraded(color: Color) -> Self {
        Self { color, upgraded: true }
    }

    /// Index of this checker's state (color x upgraded) in `0..4`
    #[inline]
    pub fn state_index(self) -> usize {
        self.color.index() * 2 + usize::from(self.upgraded)
    }
}

/// A single step along an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Vertex,
    pub to: Vertex,
}

impl Move {
    #[inline]
    pub fn new(from: Vertex, to: Vertex) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = TaratiError;

    /// Parses `C1-B1` (or `C1 B1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(|c: char| c == '-' || c.is_whitespace()).filter(|p| !p.is_empty());
        let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TaratiError::InvalidMove(s.to_string()));
        };
        Ok(Move::new(from.parse()?, to.parse()?))
    }
}
