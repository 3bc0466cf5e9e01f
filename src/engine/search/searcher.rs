//! Searcher: root move selection and search entry points.

use tracing::debug;

use crate::core::board::{Board, Square};
use crate::core::moves::Move;
use crate::engine::movegen::{legal_moves, side_moves};

use super::tiebreak::{RandomTieBreak, TieBreak};
use super::types::{ENGINE_SIDE, INFINITY, SearchLimits, SearchStats};

pub struct Searcher {
    pub(super) limits: SearchLimits,
    pub(super) stats: SearchStats,
    tie_break: Box<dyn TieBreak>,
}

impl Searcher {
    pub fn new() -> Self {
        Searcher {
            limits: SearchLimits::default(),
            stats: SearchStats::default(),
            tie_break: Box::new(RandomTieBreak),
        }
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        Searcher {
            limits,
            ..Searcher::new()
        }
    }

    /// Replace the tie-break among equally scored moves.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: impl TieBreak + 'static) -> Self {
        self.tie_break = Box::new(tie_break);
        self
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.limits.depth = depth;
    }

    /// Counters from the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for the engine's side, `None` when it cannot move.
    ///
    /// When any jump is available only jumps are considered.
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        let moves = side_moves(board, ENGINE_SIDE);
        let captures: Vec<Move> = moves.iter().copied().filter(|mv| mv.is_capture()).collect();
        let candidates = if captures.is_empty() { moves } else { captures };
        self.choose(board, &candidates)
    }

    /// Best next jump for the engine piece on `sq` in the middle of a capture
    /// chain. `None` if there is no such piece or it cannot jump.
    pub fn best_continuation(&mut self, board: &Board, sq: Square) -> Option<Move> {
        match board.piece_at(sq) {
            Some(piece) if piece.color == ENGINE_SIDE => {
                let candidates = legal_moves(board, sq, true).captures;
                self.choose(board, &candidates)
            }
            _ => None,
        }
    }

    /// Minimax score of each candidate, opponent to move after it.
    pub fn score_moves(&mut self, board: &Board, candidates: &[Move]) -> Vec<(Move, i32)> {
        self.stats = SearchStats::default();
        let depth = self.limits.depth;
        candidates
            .iter()
            .map(|mv| {
                let score = self.alpha_beta(&board.play(mv), depth, -INFINITY, INFINITY, false);
                debug!(candidate = %mv, score, "scored root move");
                (*mv, score)
            })
            .collect()
    }

    fn choose(&mut self, board: &Board, candidates: &[Move]) -> Option<Move> {
        if candidates.is_empty() {
            return None;
        }

        let scored = self.score_moves(board, candidates);
        let best_score = scored.iter().map(|&(_, score)| score).max()?;
        let tied: Vec<Move> = scored
            .into_iter()
            .filter(|&(_, score)| score == best_score)
            .map(|(mv, _)| mv)
            .collect();

        let index = self.tie_break.pick(tied.len()).min(tied.len() - 1);
        let chosen = tied[index];
        debug!(
            %chosen,
            score = best_score,
            tied = tied.len(),
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "search complete"
        );
        Some(chosen)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Best move for the engine's side with default limits and a random tie-break.
pub fn best_move(board: &Board) -> Option<Move> {
    Searcher::new().best_move(board)
}
