//! Evaluation module for Tarati positions
//!
//! Scores are signed from White's point of view:
//! - Material, with upgraded checkers worth more
//! - A bonus per upgraded checker
//! - `±WINNING_SCORE` once the game is decided

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, material_balance, material_score};
pub use weights::Weights;

/// Score of a decided game (positive when White wins)
pub const WINNING_SCORE: i32 = Weights::WINNING_SCORE;
