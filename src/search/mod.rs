//! Search module for the Tarati AI
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition table for caching search results
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
pub use tt::{EntryType, TTEntry, TTStats, TranspositionTable};
pub use zobrist::ZobristTable;

use crate::board::Position;

/// Table size used by [`best_move`]
const ONE_SHOT_TT_MB: usize = 4;

/// Search `depth` plies from `pos` with a cache that lives for this call only.
///
/// # Example
///
/// ```
/// use tarati::board::Position;
/// use tarati::search::best_move;
///
/// let result = best_move(&Position::initial(), 2, true);
/// assert!(result.best_move.is_some());
/// ```
#[must_use]
pub fn best_move(pos: &Position, depth: u8, maximizing: bool) -> SearchResult {
    Searcher::new(ONE_SHOT_TT_MB).search(pos, depth, maximizing)
}
