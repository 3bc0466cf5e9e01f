//! Move application

use crate::core::board::{Board, Square};
use crate::core::moves::Move;

/// Play `from -> to` on a copy of `board`.
///
/// The destination is trusted to come from [`legal_moves`](super::movegen::legal_moves).
/// A two-row move removes the jumped piece, which is reported in the returned
/// list. A regular piece reaching its promotion row is crowned. An empty
/// `from` square leaves the copy untouched and captures nothing.
pub fn apply_move(board: &Board, from: Square, to: Square) -> (Board, Vec<Square>) {
    let mut next = *board;
    let Some(piece) = next.piece_at(from) else {
        return (next, Vec::new());
    };

    let mut captured = Vec::new();
    if from.row.abs_diff(to.row) == 2 {
        let jumped = from.midpoint(to);
        next.clear(jumped);
        captured.push(jumped);
    }

    next.clear(from);
    let promoted = !piece.is_king() && to.row == piece.color.promotion_row();
    next.put(to, if promoted { piece.crowned() } else { piece });

    (next, captured)
}

impl Board {
    /// Board after `mv`.
    #[must_use]
    pub fn play(&self, mv: &Move) -> Board {
        apply_move(self, mv.from(), mv.to()).0
    }
}
