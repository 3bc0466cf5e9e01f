//! Move generation
//!
//! Per-square generation of simple steps and single jumps, plus side-wide
//! aggregation used for the forced-capture rule and by the search.

use crate::core::board::{Board, Color, Piece, Square};
use crate::core::moves::Move;

/// Diagonal directions as `(row, col)` deltas.
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Moves available to a single piece.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet {
    /// Destinations of non-capturing steps
    pub simple: Vec<Square>,
    /// Single jumps, each capturing exactly one piece
    pub captures: Vec<Move>,
}

impl MoveSet {
    pub fn is_empty(&self) -> bool {
        self.simple.is_empty() && self.captures.is_empty()
    }

    /// Every destination: simple steps first, then jump landings.
    pub fn destinations(&self) -> Vec<Square> {
        self.simple
            .iter()
            .copied()
            .chain(self.captures.iter().map(|mv| mv.to()))
            .collect()
    }
}

/// Directions a piece may move in: kings everywhere, regular pieces forward.
fn directions(piece: Piece) -> impl Iterator<Item = (i8, i8)> {
    let forward = piece.color.forward();
    DIAGONALS
        .into_iter()
        .filter(move |&(d_row, _)| piece.is_king() || d_row == forward)
}

/// Legal simple moves and captures for the piece on `sq`.
///
/// Both lists are always computed. Simple moves are dropped only when
/// `must_capture` is set and this piece has at least one capture of its own;
/// an empty square yields an empty set.
pub fn legal_moves(board: &Board, sq: Square, must_capture: bool) -> MoveSet {
    let Some(piece) = board.piece_at(sq) else {
        return MoveSet::default();
    };

    let mut set = MoveSet::default();
    for (d_row, d_col) in directions(piece) {
        let Some(step) = sq.offset(d_row, d_col, 1) else {
            continue;
        };

        match board.piece_at(step) {
            None => set.simple.push(step),
            Some(other) if other.color != piece.color => {
                if let Some(landing) = sq.offset(d_row, d_col, 2) {
                    if board.is_empty_at(landing) {
                        set.captures.push(Move::new_capture(sq, landing, step));
                    }
                }
            }
            Some(_) => {}
        }
    }

    if must_capture && !set.captures.is_empty() {
        set.simple.clear();
    }
    set
}

/// Every capture available to `color`, scanning the board row-major.
pub fn all_capture_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(sq, _)| legal_moves(board, sq, false).captures)
        .collect()
}

/// Every move available to `color` with no forced-capture filtering.
///
/// For each square (row-major) simple steps come before jumps.
pub fn side_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for (sq, _) in board.pieces_of(color) {
        let set = legal_moves(board, sq, false);
        moves.extend(set.simple.into_iter().map(|to| Move::new(sq, to)));
        moves.extend(set.captures);
    }
    moves
}

/// Whether the piece on `sq` can jump again.
pub fn has_more_captures(board: &Board, sq: Square) -> bool {
    !legal_moves(board, sq, false).captures.is_empty()
}
