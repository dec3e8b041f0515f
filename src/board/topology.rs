//! Static board graph: edges, adjacency, home bases and row ranks
//!
//! The graph never changes at runtime. Everything here is `const` data
//! computed at compile time, so lookups are plain array/bitmask reads.
//!
//! # Rows
//!
//! Each vertex has a row in `0..=10`, counted from White's home edge
//! (`D1`, `D2`) to Black's (`D3`, `D4`). A non-upgraded White checker may
//! only step to a strictly higher row and a non-upgraded Black checker to a
//! strictly lower one. Edges joining two vertices of the same row are
//! sideways and closed to non-upgraded checkers.
//!
//! The table is symmetric under the half-turn that swaps the home bases:
//! `row(v) + row(mirror(v)) == 10`.

use super::{Color, Vertex, VertexSet, NUM_EDGES, NUM_VERTICES};

/// Every edge of the board, each listed once
pub const EDGES: [(Vertex, Vertex); NUM_EDGES] = [
    // White home base
    (Vertex::D1, Vertex::D2),
    (Vertex::D1, Vertex::C1),
    (Vertex::D2, Vertex::C2),
    // Black home base
    (Vertex::D3, Vertex::D4),
    (Vertex::D3, Vertex::C7),
    (Vertex::D4, Vertex::C8),
    // Circumference cycle
    (Vertex::C1, Vertex::C2),
    (Vertex::C2, Vertex::C3),
    (Vertex::C3, Vertex::C4),
    (Vertex::C4, Vertex::C5),
    (Vertex::C5, Vertex::C6),
    (Vertex::C6, Vertex::C7),
    (Vertex::C7, Vertex::C8),
    (Vertex::C8, Vertex::C9),
    (Vertex::C9, Vertex::C10),
    (Vertex::C10, Vertex::C11),
    (Vertex::C11, Vertex::C12),
    (Vertex::C12, Vertex::C1),
    // Boundary cycle
    (Vertex::B1, Vertex::B2),
    (Vertex::B2, Vertex::B3),
    (Vertex::B3, Vertex::B4),
    (Vertex::B4, Vertex::B5),
    (Vertex::B5, Vertex::B6),
    (Vertex::B6, Vertex::B1),
    // Circumference to boundary
    (Vertex::C1, Vertex::B1),
    (Vertex::C2, Vertex::B1),
    (Vertex::C3, Vertex::B2),
    (Vertex::C4, Vertex::B2),
    (Vertex::C5, Vertex::B3),
    (Vertex::C6, Vertex::B3),
    (Vertex::C7, Vertex::B4),
    (Vertex::C8, Vertex::B4),
    (Vertex::C9, Vertex::B5),
    (Vertex::C10, Vertex::B5),
    (Vertex::C11, Vertex::B6),
    (Vertex::C12, Vertex::B6),
    // Boundary to center
    (Vertex::B1, Vertex::A1),
    (Vertex::B2, Vertex::A1),
    (Vertex::B3, Vertex::A1),
    (Vertex::B4, Vertex::A1),
    (Vertex::B5, Vertex::A1),
    (Vertex::B6, Vertex::A1),
];

const WHITE_HOME: VertexSet =
    VertexSet::from_vertices(&[Vertex::C1, Vertex::C2, Vertex::D1, Vertex::D2]);
const BLACK_HOME: VertexSet =
    VertexSet::from_vertices(&[Vertex::C7, Vertex::C8, Vertex::D3, Vertex::D4]);

/// Row of each vertex, indexed canonically
const ROWS: [u8; NUM_VERTICES] = [
    5, // A1
    3, 4, 6, 7, 6, 4, // B1..B6
    1, 1, 2, 4, 6, 8, 9, 9, 8, 6, 4, 2, // C1..C12
    0, 0, 10, 10, // D1..D4
];

const ADJACENCY: [VertexSet; NUM_VERTICES] = build_adjacency();

const fn build_adjacency() -> [VertexSet; NUM_VERTICES] {
    let mut adj = [VertexSet::new(); NUM_VERTICES];
    let mut i = 0;
    while i < NUM_EDGES {
        let (a, b) = EDGES[i];
        adj[a.0 as usize] = adj[a.0 as usize].with(b);
        adj[b.0 as usize] = adj[b.0 as usize].with(a);
        i += 1;
    }
    adj
}

/// Neighbors of `v`
#[inline]
pub fn adjacent(v: Vertex) -> VertexSet {
    ADJACENCY[v.to_index()]
}

/// Check whether `{u, v}` is an edge. Symmetric; a vertex is never adjacent to itself.
#[inline]
pub fn are_adjacent(u: Vertex, v: Vertex) -> bool {
    ADJACENCY[u.to_index()].contains(v)
}

/// Home base owned by `color`
#[inline]
pub fn home_base(color: Color) -> VertexSet {
    match color {
        Color::White => WHITE_HOME,
        Color::Black => BLACK_HOME,
    }
}

/// Check whether a checker of `color` standing on `v` is inside the enemy home base
#[inline]
pub fn in_enemy_home(v: Vertex, color: Color) -> bool {
    home_base(color.opponent()).contains(v)
}

/// Row rank of `v` (0 = White's home edge, 10 = Black's)
#[inline]
pub fn row(v: Vertex) -> u8 {
    ROWS[v.to_index()]
}

/// Check whether stepping `from -> to` advances a checker of `color`
#[inline]
pub fn is_forward(from: Vertex, to: Vertex, color: Color) -> bool {
    match color {
        Color::White => row(to) > row(from),
        Color::Black => row(to) < row(from),
    }
}
