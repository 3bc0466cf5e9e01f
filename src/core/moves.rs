//! Move representation
//!
//! A move is a single diagonal step or a single jump. Multi-jump chains are
//! played as consecutive jumps by the same piece, so a move never captures
//! more than one piece and the type stays `Copy`.

use super::board::Square;
use std::fmt;

/// A checkers move: origin, destination and the jumped square, if any.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    captured: Option<Square>,
}

impl Move {
    /// Create a non-capturing move
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to, captured: None }
    }

    /// Create a jump over `captured`
    #[inline]
    pub const fn new_capture(from: Square, to: Square, captured: Square) -> Self {
        Move { from, to, captured: Some(captured) }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Squares removed by this move, in order (empty or a single entry)
    #[inline]
    pub fn captured(&self) -> &[Square] {
        self.captured.as_slice()
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}
