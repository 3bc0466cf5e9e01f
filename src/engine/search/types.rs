//! Search limits, stats, and constants.

use crate::core::board::Color;

/// Side the engine plays; it maximizes the evaluation.
pub const ENGINE_SIDE: Color = Color::Black;

pub const INFINITY: i32 = 30000;
/// Score of a node whose side to move has no legal move at all.
pub const WIN_SCORE: i32 = 1000;
/// Plies searched below each root candidate.
pub const DEFAULT_DEPTH: u32 = 3;

#[derive(Clone, Debug)]
pub struct SearchLimits {
    /// Plies searched after the candidate move has been applied.
    pub depth: u32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}
