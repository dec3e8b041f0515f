//! Game rules for Tarati
//!
//! This module implements the rule set:
//! - Move legality (single forward step onto an empty vertex)
//! - Move application (flip-capture and upgrades)
//! - Move generation
//! - Game-over detection

pub mod apply;
pub mod movegen;
pub mod movement;
pub mod terminal;

// Re-exports for convenient access
pub use apply::{apply_move, try_apply_move};
pub use movegen::{has_legal_move, legal_moves, legal_moves_from};
pub use movement::is_legal_move;
pub use terminal::{is_terminal, winner};
