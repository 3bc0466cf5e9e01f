//! Core checkers types and representations
//!
//! This module contains the fundamental building blocks of the engine:
//! - Squares, colors and pieces
//! - Board state
//! - Move representation

pub mod board;
pub mod moves;

pub use board::{Board, BoardError, Color, Piece, Rank, Square, BOARD_SIZE};
pub use moves::Move;
