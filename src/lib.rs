//! Tarati rules engine and AI
//!
//! Tarati is a two-player game on a fixed 23-vertex graph:
//! - Each side starts with four checkers on its home base
//! - A checker steps along one edge onto an empty vertex
//! - Non-upgraded checkers only move forward; upgraded ones move freely
//! - Landing next to enemy checkers flips them to the mover's color
//! - Reaching (or being flipped into) the enemy home base upgrades a checker
//! - A side whose checkers have all been flipped, or who cannot move, loses
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Vertices, checkers, the board graph and the position value
//! - [`rules`]: Move legality, move application, move generation, game end
//! - [`eval`]: Static evaluation
//! - [`search`]: Minimax with alpha-beta pruning and transposition table
//! - [`engine`]: AI engine choosing moves for the side to move
//! - [`game`]: Game history with undo/redo
//!
//! # Quick Start
//!
//! ```
//! use tarati::{AIEngine, EngineConfig, Game};
//!
//! let mut game = Game::new();
//! let mut engine = AIEngine::with_config(EngineConfig {
//!     max_depth: 3,
//!     tt_size_mb: 1,
//!     ..EngineConfig::default()
//! });
//!
//! // Let the engine play both sides for a few plies
//! for _ in 0..4 {
//!     let Some(mv) = engine.get_move(game.current()) else { break };
//!     game.play_move(mv).unwrap();
//! }
//! assert!(game.ply() > 0);
//! ```
//!
//! # Scores
//!
//! Every score is from White's point of view: positive favors White.
//! White searches as the maximizing side, Black as the minimizing side.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Checker, Color, Move, Position, Vertex};
pub use engine::{AIEngine, EngineConfig, MoveResult, SearchType};
pub use error::TaratiError;
pub use game::Game;
pub use search::{best_move, SearchResult};
