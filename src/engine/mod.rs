//! Checkers engine components
//!
//! This module contains the rules and the computer opponent:
//! - Move generation with the forced-capture rule
//! - Move application and promotion
//! - Game-over detection
//! - Static evaluation
//! - Alpha-beta search

pub mod apply;
pub mod eval;
pub mod movegen;
pub mod search;
pub mod terminal;

pub use apply::apply_move;
pub use eval::evaluate;
pub use movegen::{all_capture_moves, has_more_captures, legal_moves, side_moves, MoveSet};
pub use search::{best_move, SearchLimits, SearchStats, Searcher, TieBreak};
pub use terminal::winner;
