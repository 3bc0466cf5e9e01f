//! Game-over detection

use crate::core::board::{Board, Color};

use super::movegen::legal_moves;

/// Winner of the position, if the game is over.
///
/// A side loses when it has no pieces or none of its pieces can move (any
/// step or jump counts, forced capture is not considered). Red is checked
/// first, so a board on which neither side can move reports black.
pub fn winner(board: &Board) -> Option<Color> {
    let mut count = [0usize; 2];
    let mut mobile = [false; 2];

    for (sq, piece) in board.pieces() {
        let side = piece.color.index();
        count[side] += 1;
        if !mobile[side] && !legal_moves(board, sq, false).is_empty() {
            mobile[side] = true;
        }
    }

    let lost = |color: Color| count[color.index()] == 0 || !mobile[color.index()];
    if lost(Color::Red) {
        Some(Color::Black)
    } else if lost(Color::Black) {
        Some(Color::Red)
    } else {
        None
    }
}
