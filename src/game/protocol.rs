use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::core::board::Square;
use crate::engine::eval::evaluate;
use crate::engine::search::{SearchLimits, Searcher};

use super::error::GameError;
use super::state::{Game, GameMode, Turn};

/// Default pause before the computer replies.
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(500);

/// Line-oriented text front-end driving a [`Game`].
pub struct Session {
    pub game: Game,
    searcher: Searcher,
    think_delay: Duration,
}

impl Session {
    pub fn new(mode: GameMode) -> Self {
        Session {
            game: Game::new(mode),
            searcher: Searcher::new(),
            think_delay: DEFAULT_THINK_DELAY,
        }
    }

    pub fn with_searcher(mut self, searcher: Searcher) -> Self {
        self.searcher = searcher;
        self
    }

    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    pub fn with_limits(self, limits: SearchLimits) -> Self {
        self.with_searcher(Searcher::with_limits(limits))
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.game.board())?;
        self.report_turn(out)?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !self.handle_line(line, out)? {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Execute one command. Returns `false` when the session should end.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            return Ok(true);
        };
        debug!(command, "protocol command");

        let result = match command {
            "quit" | "exit" => return Ok(false),
            "help" => self.cmd_help(out).map(Ok),
            "new" => self.cmd_new(&parts, out),
            "mode" => self.cmd_mode(&parts, out),
            "d" | "display" => self.cmd_display(out).map(Ok),
            "status" => self.cmd_status(out).map(Ok),
            "moves" => self.cmd_moves(out).map(Ok),
            "select" => self.cmd_select(&parts, out),
            "move" => self.cmd_move(&parts, out),
            "click" => self.cmd_click(&parts, out),
            "go" => self.cmd_go(out).map(Ok),
            "eval" => self.cmd_eval(out).map(Ok),
            _ => {
                writeln!(out, "error: unknown command '{command}' (try help)")?;
                return Ok(true);
            }
        }?;

        if let Err(err) = result {
            warn!(%err, command, "command rejected");
            writeln!(out, "error: {err}")?;
        }
        Ok(true)
    }

    fn cmd_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "commands:")?;
        writeln!(out, "  new [computer|two-player]   start a new game")?;
        writeln!(out, "  mode computer|two-player    switch mode and restart")?;
        writeln!(out, "  select r,c                  show destinations of a piece")?;
        writeln!(out, "  move r,c r,c                play a move")?;
        writeln!(out, "  click r,c                   select or move like a board click")?;
        writeln!(out, "  moves                       list movable pieces")?;
        writeln!(out, "  go                          engine suggestion for black")?;
        writeln!(out, "  eval                        static evaluation")?;
        writeln!(out, "  d | display | status       show the board / game state")?;
        writeln!(out, "  quit")
    }

    fn cmd_new<W: Write>(&mut self, parts: &[&str], out: &mut W) -> io::Result<Result<(), GameError>> {
        match parts.get(1).map(|m| m.parse::<GameMode>()).transpose() {
            Ok(Some(mode)) => self.game.set_mode(mode),
            Ok(None) => self.game.reset(),
            Err(err) => return Ok(Err(err)),
        }
        writeln!(out, "{}", self.game.board())?;
        self.report_turn(out)?;
        Ok(Ok(()))
    }

    fn cmd_mode<W: Write>(&mut self, parts: &[&str], out: &mut W) -> io::Result<Result<(), GameError>> {
        let Some(mode) = parts.get(1) else {
            writeln!(out, "mode {}", self.game.mode())?;
            return Ok(Ok(()));
        };
        match mode.parse::<GameMode>() {
            Ok(mode) => {
                self.game.set_mode(mode);
                writeln!(out, "mode {mode}")?;
                self.report_turn(out)?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    fn cmd_display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.game.board())
    }

    fn cmd_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "mode {}", self.game.mode())?;
        match self.game.winner() {
            Some(color) => writeln!(out, "winner {color}")?,
            None => writeln!(out, "turn {}", self.game.turn())?,
        }
        writeln!(out, "must-capture {}", self.game.must_capture())?;
        if let Some(sq) = self.game.pending_capture() {
            writeln!(out, "chain {sq}")?;
        }
        Ok(())
    }

    fn cmd_moves<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (sq, targets) in self.game.movable_pieces() {
            writeln!(out, "{sq}: {}", join_squares(&targets))?;
        }
        Ok(())
    }

    fn cmd_select<W: Write>(&mut self, parts: &[&str], out: &mut W) -> io::Result<Result<(), GameError>> {
        let sq = match parse_square(parts.get(1)) {
            Ok(sq) => sq,
            Err(err) => return Ok(Err(err)),
        };
        match self.game.select(sq) {
            Ok(targets) => {
                let listed = join_squares(targets);
                writeln!(out, "targets {listed}")?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    fn cmd_move<W: Write>(&mut self, parts: &[&str], out: &mut W) -> io::Result<Result<(), GameError>> {
        let squares = parse_square(parts.get(1)).and_then(|from| Ok((from, parse_square(parts.get(2))?)));
        let (from, to) = match squares {
            Ok(pair) => pair,
            Err(err) => return Ok(Err(err)),
        };
        match self.game.play(from, to) {
            Ok(turn) => {
                writeln!(out, "played {from}-{to}")?;
                self.after_move(turn, out)?;
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }

    fn cmd_click<W: Write>(&mut self, parts: &[&str], out: &mut W) -> io::Result<Result<(), GameError>> {
        let sq = match parse_square(parts.get(1)) {
            Ok(sq) => sq,
            Err(err) => return Ok(Err(err)),
        };
        match self.game.click(sq) {
            Ok(Some(turn)) => {
                writeln!(out, "played to {sq}")?;
                self.after_move(turn, out)?;
            }
            Ok(None) => match self.game.selected() {
                Some(selected) => {
                    writeln!(out, "selected {selected} targets {}", join_squares(self.game.targets()))?
                }
                None => writeln!(out, "selection cleared")?,
            },
            Err(err) => return Ok(Err(err)),
        }
        Ok(Ok(()))
    }

    fn cmd_go<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.searcher.best_move(self.game.board()) {
            Some(mv) => writeln!(out, "bestmove {mv}")?,
            None => writeln!(out, "bestmove none")?,
        }
        let stats = self.searcher.stats();
        writeln!(out, "info nodes {} cutoffs {}", stats.nodes, stats.cutoffs)
    }

    fn cmd_eval<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "evaluation {} (positive favors black)", evaluate(self.game.board()))
    }

    /// Report the outcome of a human move and let the computer answer.
    fn after_move<W: Write>(&mut self, turn: Turn, out: &mut W) -> io::Result<()> {
        match turn {
            Turn::Continues { at } => {
                writeln!(out, "continue {at} targets {}", join_squares(self.game.targets()))?;
                return Ok(());
            }
            Turn::Won(color) => {
                writeln!(out, "{}", self.game.board())?;
                writeln!(out, "winner {color}")?;
                return Ok(());
            }
            Turn::Passed => {}
        }

        if self.game.is_computer_turn() {
            out.flush()?;
            if !self.think_delay.is_zero() {
                thread::sleep(self.think_delay);
            }
            match self.game.computer_turn(&mut self.searcher) {
                Ok(moves) => {
                    for mv in moves {
                        writeln!(out, "computer {mv}")?;
                    }
                }
                Err(err) => writeln!(out, "error: {err}")?,
            }
        }

        writeln!(out, "{}", self.game.board())?;
        self.report_turn(out)
    }

    fn report_turn<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.game.winner() {
            Some(color) => writeln!(out, "winner {color}"),
            None if self.game.must_capture() => writeln!(out, "turn {} (must capture)", self.game.turn()),
            None => writeln!(out, "turn {}", self.game.turn()),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

fn parse_square(arg: Option<&&str>) -> Result<Square, GameError> {
    let text = arg.copied().unwrap_or("");
    Ok(text.parse::<Square>()?)
}

fn join_squares(squares: &[Square]) -> String {
    squares.iter().map(Square::to_string).collect::<Vec<_>>().join(" ")
}
