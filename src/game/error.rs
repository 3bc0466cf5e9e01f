//! Errors for turn management and the text front-end.

use thiserror::Error;

use crate::core::board::{BoardError, Color, Square};

/// Requests the turn manager refuses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game already has a winner
    #[error("Game over: {0} has won")]
    GameOver(Color),

    /// Human input while the computer is to move
    #[error("The computer is to move")]
    ComputerToMove,

    /// Computer move requested while a human is to move
    #[error("It is not the computer's turn")]
    NotComputerTurn,

    #[error("No piece on {0}")]
    NoPiece(Square),

    #[error("Piece on {square} does not belong to {turn}")]
    NotYourPiece { square: Square, turn: Color },

    /// A capture is available elsewhere but this piece cannot jump
    #[error("A capture is mandatory and the piece on {0} cannot capture")]
    MustCapture(Square),

    /// A capture chain is pending for another piece
    #[error("Capture chain must continue with the piece on {0}")]
    ChainInProgress(Square),

    #[error("Illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("Unknown game mode '{0}' (expected computer or two-player)")]
    UnknownMode(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}
