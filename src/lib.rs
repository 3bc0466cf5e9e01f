pub mod core;
pub mod engine;
pub mod game;

pub use crate::core::{Board, Color, Move, Piece, Rank, Square};
pub use engine::{
    all_capture_moves, apply_move, best_move, evaluate, has_more_captures, legal_moves, winner,
    MoveSet, Searcher,
};
pub use game::{Game, GameMode, Session};
