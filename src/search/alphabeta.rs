//! Minimax search with alpha-beta pruning and transposition table
//!
//! Scores are always from White's point of view. The maximizing side wants
//! them high, the minimizing side wants them low; the `maximizing` flag
//! alternates at every ply.
//!
//! # Features
//!
//! - Move ordering by a one-ply material look-ahead
//! - Bounded transposition table with exact/lower/upper entries
//! - First-best tie-breaking: only a strictly better score replaces the
//!   running best move
//! - Optional root-parallel search (rayon), one table shard per root move
//!
//! # Example
//!
//! ```
//! use tarati::board::Position;
//! use tarati::search::Searcher;
//!
//! let mut searcher = Searcher::new(1); // 1 MB transposition table
//! let result = searcher.search(&Position::initial(), 3, true);
//! assert!(result.best_move.is_some());
//! ```

use std::cmp::Reverse;
use std::time::Instant;

use rayon::prelude::*;

use crate::board::{Move, Position};
use crate::eval::{evaluate, material_balance, WINNING_SCORE};
use crate::rules::{apply_move, is_terminal, legal_moves};

use super::{EntryType, TTStats, TranspositionTable, ZobristTable};

/// Infinity score for alpha-beta bounds
pub const INF: i32 = WINNING_SCORE + 1;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Total cutoffs (`beta <= alpha`)
    pub beta_cutoffs: u64,
    /// Cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that returned a usable score
    pub tt_hits: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }

    /// TT hit rate in percent
    pub fn tt_hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }

    /// Merge another stats into this one (for combining worker stats)
    fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.beta_cutoffs += other.beta_cutoffs;
        self.first_move_cutoffs += other.first_move_cutoffs;
        self.tt_probes += other.tt_probes;
        self.tt_hits += other.tt_hits;
    }
}

/// Outcome of a search: score plus the move that achieves it.
///
/// `best_move` is `None` at leaves and in positions with no legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
}

impl SearchResult {
    #[inline]
    fn leaf(pos: &Position) -> Self {
        Self {
            best_move: None,
            score: evaluate(pos),
        }
    }
}

/// Legal moves paired with their resulting positions, best-looking first.
///
/// Ordered by signed checker count after the move: descending for the
/// maximizer, ascending for the minimizer. The sort is stable, so equal
/// keys keep generation order.
fn ordered_children(pos: &Position, maximizing: bool) -> Vec<(Move, Position)> {
    let mut children: Vec<(Move, Position, i32)> = legal_moves(pos)
        .into_iter()
        .map(|mv| {
            let child = apply_move(pos, mv.from, mv.to);
            (mv, child, material_balance(&child))
        })
        .collect();

    if maximizing {
        children.sort_by_key(|&(_, _, key)| Reverse(key));
    } else {
        children.sort_by_key(|&(_, _, key)| key);
    }
    children.into_iter().map(|(mv, child, _)| (mv, child)).collect()
}

/// One search thread's state: the shared key table, an optional table
/// shard it owns exclusively, and its counters.
struct Worker<'a> {
    zobrist: &'a ZobristTable,
    tt: Option<&'a mut TranspositionTable>,
    stats: SearchStats,
}

impl<'a> Worker<'a> {
    fn new(zobrist: &'a ZobristTable, tt: Option<&'a mut TranspositionTable>) -> Self {
        Self {
            zobrist,
            tt,
            stats: SearchStats::default(),
        }
    }

    fn alpha_beta(
        &mut self,
        pos: &Position,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if depth == 0 || is_terminal(pos) {
            return SearchResult::leaf(pos);
        }

        let key = self.zobrist.with_role(self.zobrist.hash(pos), maximizing);
        if let Some(tt) = self.tt.as_deref() {
            self.stats.tt_probes += 1;
            if let Some((score, best_move)) = tt.probe(key, depth, alpha, beta) {
                self.stats.tt_hits += 1;
                return SearchResult { best_move, score };
            }
        }

        let (alpha0, beta0) = (alpha, beta);
        let mut best = SearchResult {
            best_move: None,
            score: if maximizing { -INF } else { INF },
        };

        for (i, (mv, child)) in ordered_children(pos, maximizing).into_iter().enumerate() {
            let score = self.alpha_beta(&child, depth - 1, alpha, beta, !maximizing).score;

            if maximizing {
                if score > best.score {
                    best = SearchResult { best_move: Some(mv), score };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult { best_move: Some(mv), score };
                }
                beta = beta.min(best.score);
            }

            if beta <= alpha {
                self.stats.beta_cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        if let Some(tt) = self.tt.as_deref_mut() {
            let entry_type = if best.score <= alpha0 {
                EntryType::UpperBound
            } else if best.score >= beta0 {
                EntryType::LowerBound
            } else {
                EntryType::Exact
            };
            tt.store(key, depth, best.score, entry_type, best.best_move);
        }

        best
    }
}

/// Alpha-beta search engine with a transposition table.
///
/// The table persists across searches until [`Searcher::clear_tt`] is
/// called. A table size of 0 MB disables caching entirely.
pub struct Searcher {
    zobrist: ZobristTable,
    tt: Option<TranspositionTable>,
    tt_size_mb: usize,
    stats: SearchStats,
}

impl Searcher {
    /// Create a new searcher with the specified transposition table size.
    ///
    /// # Arguments
    ///
    /// * `tt_size_mb` - Size of transposition table in megabytes (0 = no table)
    #[must_use]
    pub fn new(tt_size_mb: usize) -> Self {
        Self {
            zobrist: ZobristTable::new(),
            tt: (tt_size_mb > 0).then(|| TranspositionTable::new(tt_size_mb)),
            tt_size_mb,
            stats: SearchStats::default(),
        }
    }

    /// Search `depth` plies from `pos`.
    ///
    /// `maximizing` says whether the side to move at the root wants a high
    /// (White-favoring) score. Returns the best score and the first move
    /// reaching it; the move is `None` when the root is terminal.
    #[must_use]
    pub fn search(&mut self, pos: &Position, depth: u8, maximizing: bool) -> SearchResult {
        let start = Instant::now();
        let mut worker = Worker::new(&self.zobrist, self.tt.as_mut());
        let result = worker.alpha_beta(pos, depth, -INF, INF, maximizing);
        self.stats = worker.stats;

        log::debug!(
            "search depth={} score={} move={} nodes={} cutoffs={} first_move={:.1}% tt_hits={:.1}% in {:?}",
            depth,
            result.score,
            result.best_move.map_or_else(|| "-".to_string(), |m| m.to_string()),
            self.stats.nodes,
            self.stats.beta_cutoffs,
            self.stats.first_move_rate(),
            self.stats.tt_hit_rate(),
            start.elapsed()
        );
        result
    }

    /// Root-parallel variant of [`Searcher::search`].
    ///
    /// Each root move is searched on the rayon pool with a full window and
    /// a private table shard. Results are merged in move order with the
    /// same first-best rule, so the outcome matches the sequential search.
    /// The searcher's own table is left untouched.
    #[must_use]
    pub fn search_parallel(&mut self, pos: &Position, depth: u8, maximizing: bool) -> SearchResult {
        if depth == 0 || is_terminal(pos) {
            self.stats = SearchStats {
                nodes: 1,
                ..SearchStats::default()
            };
            return SearchResult::leaf(pos);
        }

        let start = Instant::now();
        let children = ordered_children(pos, maximizing);
        let shard_mb = self.tt_size_mb / children.len();
        let use_tt = self.tt_size_mb > 0;
        let zobrist = &self.zobrist;

        let scored: Vec<(Move, i32, SearchStats)> = children
            .par_iter()
            .map(|(mv, child)| {
                let mut shard = use_tt.then(|| TranspositionTable::new(shard_mb));
                let mut worker = Worker::new(zobrist, shard.as_mut());
                let score = worker.alpha_beta(child, depth - 1, -INF, INF, !maximizing).score;
                (*mv, score, worker.stats)
            })
            .collect();

        let mut stats = SearchStats {
            nodes: 1,
            ..SearchStats::default()
        };
        let mut best = SearchResult {
            best_move: None,
            score: if maximizing { -INF } else { INF },
        };
        for (mv, score, worker_stats) in &scored {
            stats.merge(worker_stats);
            let better = if maximizing {
                *score > best.score
            } else {
                *score < best.score
            };
            if better {
                best = SearchResult {
                    best_move: Some(*mv),
                    score: *score,
                };
            }
        }
        self.stats = stats;

        log::debug!(
            "parallel search depth={} root_moves={} score={} nodes={} in {:?}",
            depth,
            scored.len(),
            best.score,
            self.stats.nodes,
            start.elapsed()
        );
        best
    }

    /// Counters from the most recent search
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get statistics about the transposition table.
    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.tt.as_ref().map(TranspositionTable::stats).unwrap_or_default()
    }

    /// Clear the transposition table.
    pub fn clear_tt(&mut self) {
        if let Some(tt) = self.tt.as_mut() {
            tt.clear();
        }
    }
}
