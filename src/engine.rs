//! Main AI Engine on top of the search
//!
//! The engine picks a move for the side to move in any position. It checks
//! the cheap cases before running a full search:
//!
//! 1. **Terminal**: the game is over, there is nothing to play
//! 2. **Only move**: a single legal move needs no search
//! 3. **Immediate win**: a move that ends the game for the mover
//! 4. **Alpha-Beta**: minimax search to the configured depth
//!
//! # Example
//!
//! ```
//! use tarati::{AIEngine, EngineConfig, Position};
//!
//! let mut engine = AIEngine::with_config(EngineConfig {
//!     max_depth: 3,
//!     tt_size_mb: 1,
//!     ..EngineConfig::default()
//! });
//!
//! let result = engine.get_move_with_stats(&Position::initial());
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Color, Move, Position};
use crate::eval::{evaluate, WINNING_SCORE};
use crate::rules::{apply_move, legal_moves, winner};
use crate::search::{SearchResult, Searcher, TTStats};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Game already over; no move
    Terminal,
    /// Exactly one legal move, played without searching
    OnlyMove,
    /// Found a move that wins on the spot
    ImmediateWin,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Score from White's point of view
    pub score: i32,
    /// Which shortcut (or the full search) produced this move
    pub search_type: SearchType,
    /// Depth searched (0 when no search ran)
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn terminal(pos: &Position, time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: evaluate(pos),
            search_type: SearchType::Terminal,
            depth: 0,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn only_move(mv: Move, score: i32, time_ms: u64) -> Self {
        Self {
            best_move: Some(mv),
            score,
            search_type: SearchType::OnlyMove,
            depth: 0,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn immediate_win(mv: Move, color: Color, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: Some(mv),
            score: match color {
                Color::White => WINNING_SCORE,
                Color::Black => -WINNING_SCORE,
            },
            search_type: SearchType::ImmediateWin,
            depth: 1,
            time_ms,
            nodes,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, depth: u8, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            depth,
            time_ms,
            nodes,
        }
    }
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth in plies
    pub max_depth: u8,
    /// Transposition table size in megabytes (0 disables the table)
    pub tt_size_mb: usize,
    /// Keep cached results between moves instead of clearing per search
    pub keep_cache: bool,
    /// Split the root moves across the rayon pool
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            tt_size_mb: 16,
            keep_cache: false,
            parallel: false,
        }
    }
}

/// Main AI Engine for Tarati.
///
/// Plays for whichever side is to move: White maximizes, Black minimizes.
///
/// # Example
///
/// ```
/// use tarati::{AIEngine, Position};
/// use tarati::rules::is_legal_move;
///
/// let mut engine = AIEngine::new();
/// let pos = Position::initial();
/// let mv = engine.get_move(&pos).unwrap();
/// assert!(is_legal_move(&pos, mv.from, mv.to));
/// ```
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    ///
    /// Default configuration:
    /// - 16 MB transposition table, cleared before every search
    /// - Depth 3
    /// - Sequential search
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an AI engine with custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(config.tt_size_mb),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_max_depth(&mut self, depth: u8) {
        self.config.max_depth = depth;
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.config.max_depth
    }

    /// Get the best move for the side to move.
    ///
    /// Returns `None` when the game is over.
    #[must_use]
    pub fn get_move(&mut self, pos: &Position) -> Option<Move> {
        self.get_move_with_stats(pos).best_move
    }

    /// Get the best move with detailed search statistics.
    ///
    /// # Search Priority
    ///
    /// 1. Terminal position (no move)
    /// 2. Single legal move
    /// 3. Immediate win
    /// 4. Regular alpha-beta search
    #[must_use]
    pub fn get_move_with_stats(&mut self, pos: &Position) -> MoveResult {
        let start = Instant::now();
        let elapsed_ms = || start.elapsed().as_millis() as u64;
        let mover = pos.side_to_move();

        if winner(pos).is_some() {
            return MoveResult::terminal(pos, elapsed_ms());
        }

        let moves = legal_moves(pos);
        if let [only] = moves.as_slice() {
            let child = apply_move(pos, only.from, only.to);
            log::debug!("{mover}: only move {only}");
            return MoveResult::only_move(*only, evaluate(&child), elapsed_ms());
        }

        if let Some(win) = self.find_immediate_win(pos, &moves) {
            log::debug!("{mover}: immediate win {win}");
            return MoveResult::immediate_win(win, mover, elapsed_ms(), moves.len() as u64);
        }

        if !self.config.keep_cache {
            self.searcher.clear_tt();
        }

        let depth = self.config.max_depth;
        let maximizing = mover == Color::White;
        let result = if self.config.parallel {
            self.searcher.search_parallel(pos, depth, maximizing)
        } else {
            self.searcher.search(pos, depth, maximizing)
        };
        let nodes = self.searcher.stats().nodes;

        log::debug!(
            "{mover}: depth {depth} chose {} (score {}, {} nodes)",
            result.best_move.map_or_else(|| "-".to_string(), |m| m.to_string()),
            result.score,
            nodes
        );
        MoveResult::from_alphabeta(result, depth, elapsed_ms(), nodes)
    }

    /// First move (in generation order) after which the mover has won.
    fn find_immediate_win(&self, pos: &Position, moves: &[Move]) -> Option<Move> {
        let mover = pos.side_to_move();
        moves
            .iter()
            .copied()
            .find(|mv| winner(&apply_move(pos, mv.from, mv.to)) == Some(mover))
    }

    /// Clear the transposition table.
    pub fn clear_cache(&mut self) {
        self.searcher.clear_tt();
    }

    /// Get statistics about the transposition table.
    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.searcher.tt_stats()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
