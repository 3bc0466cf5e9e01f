//! Static evaluation
//!
//! Material plus an advancement bonus, from black's point of view: positive
//! scores favor black, the side the engine plays.

use crate::core::board::{BOARD_SIZE, Board, Color, Piece};

pub const REGULAR_VALUE: i32 = 10;
pub const KING_VALUE: i32 = 15;

/// Value of a piece standing on `row`, before applying its sign.
#[inline]
fn piece_score(piece: Piece, row: u8) -> i32 {
    let value = if piece.is_king() { KING_VALUE } else { REGULAR_VALUE };
    let advance = match piece.color {
        Color::Black => row as i32,
        Color::Red => (BOARD_SIZE as i32 - 1) - row as i32,
    };
    value + advance
}

/// Sum over black pieces minus sum over red pieces.
pub fn evaluate(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(sq, piece)| match piece.color {
            Color::Black => piece_score(piece, sq.row),
            Color::Red => -piece_score(piece, sq.row),
        })
        .sum()
}
