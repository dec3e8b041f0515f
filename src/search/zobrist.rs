//! Zobrist hashing for position identification
//!
//! Every (vertex, checker state) pair gets a fixed random key; a position's
//! hash is the XOR of the keys of its occupied vertices, plus one more key
//! when White is to move. XOR makes the result independent of the order in
//! which checkers were placed, and two positions that differ only in side to
//! move never share a hash.
//!
//! # Example
//!
//! ```
//! use tarati::board::{Color, Position};
//! use tarati::search::ZobristTable;
//!
//! let zt = ZobristTable::new();
//! let mut pos = Position::initial();
//! let white_to_move = zt.hash(&pos);
//!
//! pos.set_side_to_move(Color::Black);
//! assert_ne!(zt.hash(&pos), white_to_move);
//! assert_eq!(zt.toggle_side(zt.hash(&pos)), white_to_move);
//! ```

use crate::board::{Color, Position, NUM_VERTICES};

/// Number of checker states: color x upgraded
const CHECKER_STATES: usize = 4;

/// Zobrist hash table for position hashing.
pub struct ZobristTable {
    /// Random values per vertex, indexed by `Checker::state_index`
    checkers: [[u64; CHECKER_STATES]; NUM_VERTICES],
    /// Random value XORed when White is to move
    white_to_move: u64,
    /// Random value XORed when the node is searched as the maximizing side
    maximizer: u64,
}

impl ZobristTable {
    /// Create a new Zobrist table with deterministic random values.
    ///
    /// Uses a linear congruential generator (LCG) with a fixed seed
    /// so hashes are reproducible across runs.
    #[must_use]
    pub fn new() -> Self {
        // Constants from Knuth's MMIX LCG
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            seed
        };

        let mut checkers = [[0u64; CHECKER_STATES]; NUM_VERTICES];
        for keys in checkers.iter_mut() {
            for key in keys.iter_mut() {
                *key = next_rand();
            }
        }

        Self {
            checkers,
            white_to_move: next_rand(),
            maximizer: next_rand(),
        }
    }

    /// Compute the full hash of a position, side to move included.
    ///
    /// Cheap enough to recompute at every node: at most one lookup per
    /// vertex.
    #[must_use]
    pub fn hash(&self, pos: &Position) -> u64 {
        let mut h = pos
            .checkers()
            .fold(0u64, |h, (v, c)| h ^ self.checkers[v.to_index()][c.state_index()]);

        if pos.side_to_move() == Color::White {
            h ^= self.white_to_move;
        }
        h
    }

    /// Flip the side-to-move component of a hash
    #[inline]
    #[must_use]
    pub fn toggle_side(&self, hash: u64) -> u64 {
        hash ^ self.white_to_move
    }

    /// Fold the searching role (maximizer or minimizer) into a hash.
    ///
    /// Search scores depend on the role as well as the position, so table
    /// keys carry both.
    #[inline]
    #[must_use]
    pub fn with_role(&self, hash: u64, maximizing: bool) -> u64 {
        if maximizing {
            hash ^ self.maximizer
        } else {
            hash
        }
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
