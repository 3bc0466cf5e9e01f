//! Minimax with alpha-beta pruning.

use crate::core::board::Board;
use crate::engine::eval::evaluate;
use crate::engine::movegen::side_moves;

use super::searcher::Searcher;
use super::types::{ENGINE_SIDE, INFINITY, WIN_SCORE};

impl Searcher {
    /// Score `board` from the engine's point of view, `depth` plies deep.
    ///
    /// The engine maximizes and its opponent minimizes. Every move of the
    /// side to move is searched, jumps are not forced inside the tree. A side
    /// without moves scores `-WIN_SCORE` (engine stuck) or `WIN_SCORE`
    /// (opponent stuck).
    pub(super) fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return evaluate(board);
        }

        let side = if maximizing { ENGINE_SIDE } else { !ENGINE_SIDE };
        let moves = side_moves(board, side);
        if moves.is_empty() {
            return if maximizing { -WIN_SCORE } else { WIN_SCORE };
        }

        if maximizing {
            let mut best = -INFINITY;
            for mv in &moves {
                let score = self.alpha_beta(&board.play(mv), depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in &moves {
                let score = self.alpha_beta(&board.play(mv), depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}
