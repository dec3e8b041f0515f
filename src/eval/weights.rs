//! Scoring weights for Tarati evaluation
//!
//! Scores are in half-points so the 1.5 value of an upgraded checker stays
//! integral: an unupgraded checker counts 2, an upgraded one 3.

/// Evaluation weights
pub struct Weights;

impl Weights {
    /// Decisive result; terminal positions score exactly this, signed
    pub const WINNING_SCORE: i32 = 1_000_000;

    /// Per half-point of material
    pub const PIECE: i32 = 97;
    /// Per upgraded checker, in half-point units (117 per checker at full scale)
    pub const UPGRADE: i32 = 2 * 117;

    /// Half-points of an unupgraded checker
    pub const PLAIN_HALVES: i32 = 2;
    /// Half-points of an upgraded checker
    pub const UPGRADED_HALVES: i32 = 3;
}
