//! Checkers board representation
//!
//! The board is a plain 8x8 grid of optional pieces. It is `Copy`, so every
//! transformation hands back a fresh snapshot and callers never observe a
//! board changing underneath them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of rows and columns.
pub const BOARD_SIZE: usize = 8;

/// Errors raised while parsing board diagrams and square notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid diagram: expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("Invalid diagram: row {row} has {len} squares (expected 8)")]
    RowLength { row: usize, len: usize },

    #[error("Invalid diagram: unknown piece '{0}'")]
    UnknownPiece(char),

    #[error("Invalid diagram: piece on light square {0}")]
    LightSquare(Square),

    #[error("Invalid square '{0}' (expected \"row,col\" with both in 0-7)")]
    BadSquare(String),
}

/// Square on the board, `(row, col)` with row 0 at black's home edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    /// Build a square from signed coordinates, `None` when off the board.
    #[inline]
    pub fn checked(row: i8, col: i8) -> Option<Self> {
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Step `steps` times along a diagonal direction.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8, steps: i8) -> Option<Self> {
        Square::checked(self.row as i8 + d_row * steps, self.col as i8 + d_col * steps)
    }

    /// Dark squares are the only playable ones.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Square halfway between two squares a jump apart.
    #[inline]
    pub const fn midpoint(self, other: Square) -> Square {
        Square::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }

    /// Every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    /// Parse `"row,col"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || BoardError::BadSquare(s.to_string());
        let (row, col) = s.trim().split_once(',').ok_or_else(bad)?;
        let row: i8 = row.trim().parse().map_err(|_| bad())?;
        let col: i8 = col.trim().parse().map_err(|_| bad())?;
        Square::checked(row, col).ok_or_else(bad)
    }
}

/// Piece color. Red moves first and advances toward row 0.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row delta of a forward step for a regular piece
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// Row on which a regular piece of this color is crowned
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Black => (BOARD_SIZE - 1) as u8,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;
    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece rank
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Rank {
    Regular,
    King,
}

/// A colored piece
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Piece { color, rank }
    }

    #[inline]
    pub const fn regular(color: Color) -> Self {
        Piece::new(color, Rank::Regular)
    }

    #[inline]
    pub const fn king(color: Color) -> Self {
        Piece::new(color, Rank::King)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Crowned copy of this piece.
    #[inline]
    pub const fn crowned(self) -> Self {
        Piece::king(self.color)
    }

    /// Character representation (`r`/`b` regular, uppercase for kings)
    pub fn to_char(self) -> char {
        let c = match self.color {
            Color::Red => 'r',
            Color::Black => 'b',
        };
        if self.is_king() { c.to_ascii_uppercase() } else { c }
    }

    /// Parse a piece from character
    pub fn from_char(c: char) -> Option<Self> {
        let color = match c.to_ascii_lowercase() {
            'r' => Color::Red,
            'b' => Color::Black,
            _ => return None,
        };
        let rank = if c.is_uppercase() { Rank::King } else { Rank::Regular };
        Some(Piece::new(color, rank))
    }
}

/// The checkers board state
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub const fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting layout: black on rows 0-2, red on rows 5-7.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for sq in Square::all().filter(|sq| sq.is_dark()) {
            match sq.row {
                0..=2 => board.put(sq, Piece::regular(Color::Black)),
                5..=7 => board.put(sq, Piece::regular(Color::Red)),
                _ => {}
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row as usize][sq.col as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Copy of this board with `piece` placed on `sq`.
    #[must_use]
    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Self {
        self.put(sq, piece);
        self
    }

    /// Copy of this board with `sq` cleared.
    #[must_use]
    pub fn without_piece(mut self, sq: Square) -> Self {
        self.clear(sq);
        self
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.row as usize][sq.col as usize] = Some(piece);
    }

    #[inline]
    pub(crate) fn clear(&mut self, sq: Square) {
        self.squares[sq.row as usize][sq.col as usize] = None;
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Occupied squares of one color in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// Parse a board diagram: eight rows (row 0 first) of eight characters,
    /// `.` or `-` for an empty square, `r`/`b` for regular pieces and `R`/`B`
    /// for kings. Whitespace inside a row is ignored.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(BoardError::RowLength { row, len: cells.len() });
            }
            for (col, &c) in cells.iter().enumerate() {
                let sq = Square::new(row as u8, col as u8);
                if c == '.' || c == '-' {
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(BoardError::UnknownPiece(c))?;
                if !sq.is_dark() {
                    return Err(BoardError::LightSquare(sq));
                }
                board.put(sq, piece);
            }
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_diagram`].
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                out.push(self.piece_at(Square::new(row, col)).map_or('.', Piece::to_char));
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0 1 2 3 4 5 6 7")?;
        for row in 0..BOARD_SIZE as u8 {
            write!(f, " {row}")?;
            for col in 0..BOARD_SIZE as u8 {
                let c = self.piece_at(Square::new(row, col)).map_or('.', Piece::to_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
