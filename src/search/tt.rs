//! Transposition Table for caching search results
//!
//! The transposition table stores search results indexed by position hash,
//! so a position reached again through a different move order is not
//! searched twice. The table is bounded: it is sized in megabytes up front
//! and never grows.
//!
//! # Example
//!
//! ```
//! use tarati::board::{Move, Vertex};
//! use tarati::search::{EntryType, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new(1); // 1 MB
//!
//! let hash = 0x1234_5678_9ABC_DEF0;
//! let mv = Move::new(Vertex::C1, Vertex::B1);
//! tt.store(hash, 3, 194, EntryType::Exact, Some(mv));
//!
//! assert_eq!(tt.probe(hash, 3, -1000, 1000), Some((194, Some(mv))));
//! // A shallower entry never answers a deeper search
//! assert_eq!(tt.probe(hash, 4, -1000, 1000), None);
//! ```

use crate::board::Move;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - true score >= stored value (fail-high)
    LowerBound,
    /// Upper bound - true score <= stored value (fail-low)
    UpperBound,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    /// Zobrist hash of the position
    pub hash: u64,
    /// Remaining depth this result was searched to
    pub depth: u8,
    /// Score from White's point of view
    pub score: i32,
    /// How `score` relates to the true value
    pub entry_type: EntryType,
    /// Best move found for this position
    pub best_move: Option<Move>,
}

/// Transposition table for caching search results.
///
/// Direct-mapped: each hash maps to exactly one slot. Collisions are
/// resolved by a depth-preferred replacement policy.
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    size: usize,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in megabytes.
    ///
    /// Always holds at least 1024 entries.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<TTEntry>>();
        let size = ((size_mb * 1024 * 1024) / entry_size).max(1024);

        Self {
            entries: vec![None; size],
            size,
        }
    }

    #[inline]
    fn slot(&self, hash: u64) -> usize {
        (hash % self.size as u64) as usize
    }

    /// Probe the table for a position.
    ///
    /// Returns `Some((score, best_move))` only when the stored result is
    /// usable for a search of `depth` remaining plies under the window
    /// `(alpha, beta)`: the entry must be at least as deep, and a bound
    /// entry must fall on the cutoff side of the window.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: u8, alpha: i32, beta: i32) -> Option<(i32, Option<Move>)> {
        let entry = self.entries[self.slot(hash)]?;

        if entry.hash != hash || entry.depth < depth {
            return None;
        }

        let usable = match entry.entry_type {
            EntryType::Exact => true,
            EntryType::LowerBound => entry.score >= beta,
            EntryType::UpperBound => entry.score <= alpha,
        };
        usable.then_some((entry.score, entry.best_move))
    }

    /// Store a position in the table.
    ///
    /// An entry is replaced if the slot is empty, holds the same position,
    /// or the new search is at least as deep as the existing entry.
    pub fn store(
        &mut self,
        hash: u64,
        depth: u8,
        score: i32,
        entry_type: EntryType,
        best_move: Option<Move>,
    ) {
        let idx = self.slot(hash);

        let should_replace = match &self.entries[idx] {
            None => true,
            Some(e) => e.hash == hash || e.depth <= depth,
        };

        if should_replace {
            self.entries[idx] = Some(TTEntry {
                hash,
                depth,
                score,
                entry_type,
                best_move,
            });
        }
    }

    /// Clear all entries in the table.
    pub fn clear(&mut self) {
        self.entries.fill(None);
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        TTStats {
            size: self.size,
            used,
            usage_percent: (used as f64 / self.size as f64 * 100.0) as u8,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    /// Total number of slots in the table
    pub size: usize,
    /// Number of slots currently occupied
    pub used: usize,
    /// Percentage of table in use (0-100)
    pub usage_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Vertex;

    fn mv() -> Option<Move> {
        Some(Move::new(Vertex::B1, Vertex::A1))
    }

    #[test]
    fn test_tt_store_and_probe() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0xDEAD_BEEF;
        tt.store(hash, 4, 97, EntryType::Exact, mv());

        assert_eq!(tt.probe(hash, 4, -10, 10), Some((97, mv())));
        assert_eq!(tt.probe(hash, 2, -10, 10), Some((97, mv())));
        assert_eq!(tt.probe(hash, 5, -10, 10), None);
        assert_eq!(tt.probe(hash ^ 1, 4, -10, 10), None);
    }

    #[test]
    fn test_tt_bounds() {
        let mut tt = TranspositionTable::new(1);
        let lower = 1;
        let upper = 2;
        tt.store(lower, 3, 500, EntryType::LowerBound, mv());
        tt.store(upper, 3, -500, EntryType::UpperBound, mv());

        // Lower bound only answers when it already fails high
        assert_eq!(tt.probe(lower, 3, 0, 400), Some((500, mv())));
        assert_eq!(tt.probe(lower, 3, 0, 600), None);

        // Upper bound only answers when it already fails low
        assert_eq!(tt.probe(upper, 3, -400, 0), Some((-500, mv())));
        assert_eq!(tt.probe(upper, 3, -600, 0), None);
    }

    #[test]
    fn test_tt_depth_preferred_replacement() {
        let mut tt = TranspositionTable::new(1);
        let size = tt.stats().size as u64;
        let a = 7;
        let b = 7 + size; // same slot, different position

        tt.store(a, 5, 10, EntryType::Exact, None);
        tt.store(b, 2, 20, EntryType::Exact, None);
        assert_eq!(tt.probe(a, 5, -100, 100), Some((10, None)));
        assert_eq!(tt.probe(b, 2, -100, 100), None);

        tt.store(b, 6, 30, EntryType::Exact, None);
        assert_eq!(tt.probe(a, 5, -100, 100), None);
        assert_eq!(tt.probe(b, 6, -100, 100), Some((30, None)));
    }

    #[test]
    fn test_tt_clear_and_stats() {
        let mut tt = TranspositionTable::new(1);
        assert_eq!(tt.stats().used, 0);
        assert!(tt.stats().size >= 1024);

        for h in 0..10 {
            tt.store(h, 1, 0, EntryType::Exact, None);
        }
        assert_eq!(tt.stats().used, 10);

        tt.clear();
        assert_eq!(tt.stats().used, 0);
        assert_eq!(tt.probe(3, 1, -1, 1), None);
    }
}
