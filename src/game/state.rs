//! Turn management
//!
//! `Game` owns the state a front-end needs between moves: whose turn it is,
//! the selected piece and its destinations, a pending capture chain and the
//! winner. Every rule question is answered by the engine functions; the
//! must-capture flag is derived again after every board change.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::core::board::{Board, Color, Square};
use crate::core::moves::Move;
use crate::engine::apply::apply_move;
use crate::engine::movegen::{all_capture_moves, has_more_captures, legal_moves};
use crate::engine::search::{Searcher, ENGINE_SIDE};
use crate::engine::terminal::winner;

use super::error::GameError;

/// Who controls black.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GameMode {
    /// Black is played by the engine
    Computer,
    #[default]
    TwoPlayer,
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "computer" | "cpu" => Ok(GameMode::Computer),
            "two-player" | "twoplayer" | "2p" => Ok(GameMode::TwoPlayer),
            _ => Err(GameError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Computer => write!(f, "computer"),
            GameMode::TwoPlayer => write!(f, "two-player"),
        }
    }
}

/// Outcome of a played move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Turn {
    /// The piece jumped and must jump again from `at`
    Continues { at: Square },
    /// The other side is to move
    Passed,
    /// The move ended the game
    Won(Color),
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    selected: Option<Square>,
    targets: Vec<Square>,
    mode: GameMode,
    winner: Option<Color>,
    must_capture: bool,
    pending_capture: Option<Square>,
}

impl Game {
    /// Fresh game from the starting layout, red to move.
    pub fn new(mode: GameMode) -> Self {
        Self::from_board(Board::startpos(), Color::Red, mode)
    }

    /// Game continuing from an arbitrary position.
    pub fn from_board(board: Board, turn: Color, mode: GameMode) -> Self {
        let mut game = Game {
            board,
            turn,
            selected: None,
            targets: Vec::new(),
            mode,
            winner: None,
            must_capture: false,
            pending_capture: None,
        };
        game.refresh_must_capture();
        game
    }

    /// Restart in the current mode.
    pub fn reset(&mut self) {
        *self = Game::new(self.mode);
    }

    /// Switch mode, which restarts the game.
    pub fn set_mode(&mut self, mode: GameMode) {
        *self = Game::new(mode);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Legal destinations of the selected piece.
    pub fn targets(&self) -> &[Square] {
        &self.targets
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn must_capture(&self) -> bool {
        self.must_capture
    }

    /// Square of the piece that must keep jumping, if a chain is pending.
    pub fn pending_capture(&self) -> Option<Square> {
        self.pending_capture
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::Computer && self.turn == ENGINE_SIDE && self.winner.is_none()
    }

    fn refresh_must_capture(&mut self) {
        self.must_capture = !all_capture_moves(&self.board, self.turn).is_empty();
    }

    fn ensure_human_can_act(&self) -> Result<(), GameError> {
        if let Some(color) = self.winner {
            return Err(GameError::GameOver(color));
        }
        if self.is_computer_turn() {
            return Err(GameError::ComputerToMove);
        }
        Ok(())
    }

    /// Destinations the side to move may reach from `sq` right now.
    pub fn targets_for(&self, sq: Square) -> Result<Vec<Square>, GameError> {
        if let Some(chain) = self.pending_capture {
            if sq != chain {
                return Err(GameError::ChainInProgress(chain));
            }
            let set = legal_moves(&self.board, sq, true);
            return Ok(set.captures.iter().map(|mv| mv.to()).collect());
        }

        let piece = self.board.piece_at(sq).ok_or(GameError::NoPiece(sq))?;
        if piece.color != self.turn {
            return Err(GameError::NotYourPiece { square: sq, turn: self.turn });
        }

        let set = legal_moves(&self.board, sq, self.must_capture);
        if self.must_capture {
            if set.captures.is_empty() {
                return Err(GameError::MustCapture(sq));
            }
            return Ok(set.captures.iter().map(|mv| mv.to()).collect());
        }
        Ok(set.destinations())
    }

    /// Every piece of the side to move with its current destinations.
    pub fn movable_pieces(&self) -> Vec<(Square, Vec<Square>)> {
        if let Some(chain) = self.pending_capture {
            return self
                .targets_for(chain)
                .map(|targets| vec![(chain, targets)])
                .unwrap_or_default();
        }
        self.board
            .pieces_of(self.turn)
            .filter_map(|(sq, _)| self.targets_for(sq).ok().map(|targets| (sq, targets)))
            .filter(|(_, targets)| !targets.is_empty())
            .collect()
    }

    /// Select a piece of the side to move and return its destinations.
    pub fn select(&mut self, sq: Square) -> Result<&[Square], GameError> {
        self.ensure_human_can_act()?;
        let targets = self.targets_for(sq)?;
        self.selected = Some(sq);
        self.targets = targets;
        Ok(&self.targets)
    }

    pub fn clear_selection(&mut self) {
        if self.pending_capture.is_none() {
            self.selected = None;
            self.targets.clear();
        }
    }

    /// Play `from -> to` for the human side to move.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Turn, GameError> {
        self.ensure_human_can_act()?;
        let targets = self.targets_for(from)?;
        if !targets.contains(&to) {
            return Err(GameError::IllegalMove { from, to });
        }
        Ok(self.execute(from, to))
    }

    /// Square-click semantics of a board front-end: play to a highlighted
    /// destination, otherwise select an own piece, otherwise deselect.
    ///
    /// Returns the outcome when a move was played.
    pub fn click(&mut self, sq: Square) -> Result<Option<Turn>, GameError> {
        self.ensure_human_can_act()?;

        if let Some(chain) = self.pending_capture {
            if self.targets.contains(&sq) {
                return Ok(Some(self.execute(chain, sq)));
            }
            return Ok(None);
        }

        if let Some(from) = self.selected {
            if self.targets.contains(&sq) {
                return Ok(Some(self.execute(from, sq)));
            }
        }

        match self.board.piece_at(sq) {
            Some(piece) if piece.color == self.turn => {
                let selected = self.select(sq).map(|_| None);
                if selected.is_err() {
                    self.clear_selection();
                }
                selected
            }
            _ => {
                self.clear_selection();
                Ok(None)
            }
        }
    }

    /// Let the engine play black, including any capture chain.
    ///
    /// Returns the moves played, empty when black has no move.
    pub fn computer_turn(&mut self, searcher: &mut Searcher) -> Result<Vec<Move>, GameError> {
        if let Some(color) = self.winner {
            return Err(GameError::GameOver(color));
        }
        if !self.is_computer_turn() {
            return Err(GameError::NotComputerTurn);
        }

        let mut played = Vec::new();
        loop {
            let choice = match self.pending_capture {
                Some(sq) => searcher.best_continuation(&self.board, sq),
                None => searcher.best_move(&self.board),
            };
            let Some(mv) = choice else {
                self.winner = winner(&self.board);
                debug!(winner = ?self.winner, "computer has no move");
                break;
            };

            played.push(mv);
            info!(%mv, "computer move");
            if !matches!(self.execute(mv.from(), mv.to()), Turn::Continues { .. }) {
                break;
            }
        }
        Ok(played)
    }

    /// Apply a move already known to be legal and advance the turn state.
    fn execute(&mut self, from: Square, to: Square) -> Turn {
        let before = self.board.piece_at(from);
        let (board, captured) = apply_move(&self.board, from, to);
        self.board = board;
        debug!(side = %self.turn, %from, %to, captured = captured.len(), "move played");

        if let (Some(was), Some(now)) = (before, board.piece_at(to)) {
            if !was.is_king() && now.is_king() {
                info!(side = %now.color, square = %to, "piece crowned");
            }
        }

        if !captured.is_empty() && has_more_captures(&board, to) {
            debug!(square = %to, "capture chain continues");
            self.pending_capture = Some(to);
            self.selected = Some(to);
            self.targets = legal_moves(&board, to, true)
                .captures
                .iter()
                .map(|mv| mv.to())
                .collect();
            self.must_capture = true;
            return Turn::Continues { at: to };
        }

        self.pending_capture = None;
        self.selected = None;
        self.targets.clear();
        self.turn = !self.turn;
        self.winner = winner(&board);
        self.refresh_must_capture();

        match self.winner {
            Some(color) => {
                info!(winner = %color, "game over");
                Turn::Won(color)
            }
            None => Turn::Passed,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
