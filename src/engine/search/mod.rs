//! Search: root selection, minimax with alpha-beta, tie-breaking.

mod alphabeta;
mod searcher;
mod tiebreak;
mod types;

pub use searcher::{best_move, Searcher};
pub use tiebreak::{RandomTieBreak, TieBreak};
pub use types::{SearchLimits, SearchStats, DEFAULT_DEPTH, ENGINE_SIDE, INFINITY, WIN_SCORE};
