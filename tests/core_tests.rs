//! Core Module Tests
//!
//! Tests for squares, pieces, the board and moves.

use checkers::core::board::{Board, BoardError, Color, Piece, Rank, Square};
use checkers::core::moves::Move;

// ============================================================================
// Square Tests
// ============================================================================

#[test]
fn test_square_parse() {
    assert_eq!("3,4".parse::<Square>(), Ok(Square::new(3, 4)));
    assert_eq!(" 0 , 7 ".parse::<Square>(), Ok(Square::new(0, 7)));
    assert!("8,0".parse::<Square>().is_err());
    assert!("-1,2".parse::<Square>().is_err());
    assert!("e4".parse::<Square>().is_err());
}

#[test]
fn test_square_display() {
    assert_eq!(Square::new(5, 2).to_string(), "5,2");
}

#[test]
fn test_square_is_dark() {
    assert!(Square::new(0, 1).is_dark());
    assert!(Square::new(5, 0).is_dark());
    assert!(!Square::new(0, 0).is_dark());
    assert!(!Square::new(7, 7).is_dark());
}

#[test]
fn test_square_all_row_major() {
    let all: Vec<Square> = Square::all().collect();
    assert_eq!(all.len(), 64);
    assert_eq!(all[0], Square::new(0, 0));
    assert_eq!(all[9], Square::new(1, 1));
    assert_eq!(all[63], Square::new(7, 7));
}

// ============================================================================
// Piece Tests
// ============================================================================

#[test]
fn test_piece_chars() {
    assert_eq!(Piece::regular(Color::Red).to_char(), 'r');
    assert_eq!(Piece::king(Color::Red).to_char(), 'R');
    assert_eq!(Piece::regular(Color::Black).to_char(), 'b');
    assert_eq!(Piece::from_char('B'), Some(Piece::new(Color::Black, Rank::King)));
    assert_eq!(Piece::from_char('x'), None);
}

#[test]
fn test_crowning_makes_new_value() {
    let piece = Piece::regular(Color::Black);
    let king = piece.crowned();
    assert!(!piece.is_king());
    assert!(king.is_king());
    assert_eq!(king.color, Color::Black);
}

#[test]
fn test_color_opposite() {
    assert_eq!(!Color::Red, Color::Black);
    assert_eq!(Color::Black.opposite(), Color::Red);
    assert_eq!(Color::Red.promotion_row(), 0);
    assert_eq!(Color::Black.promotion_row(), 7);
}

// ============================================================================
// Board Tests
// ============================================================================

#[test]
fn test_startpos_layout() {
    let board = Board::startpos();
    assert_eq!(board.count(Color::Black), 12);
    assert_eq!(board.count(Color::Red), 12);

    let mut empty = 0;
    for sq in Square::all() {
        match board.piece_at(sq) {
            Some(piece) => {
                assert!(sq.is_dark(), "piece on light square {sq}");
                assert_eq!(piece.rank, Rank::Regular);
                match piece.color {
                    Color::Black => assert!(sq.row <= 2),
                    Color::Red => assert!(sq.row >= 5),
                }
            }
            None => empty += 1,
        }
    }
    assert_eq!(empty, 40);
}

#[test]
fn test_startpos_diagram() {
    let expected = "\
.b.b.b.b
b.b.b.b.
.b.b.b.b
........
........
r.r.r.r.
.r.r.r.r
r.r.r.r.
";
    assert_eq!(Board::startpos().to_diagram(), expected);
}

#[test]
fn test_diagram_roundtrip() {
    let diagrams = [
        Board::startpos().to_diagram(),
        "........\n........\n........\n..r.....\n.....R..\n....b...\n.......B\n........\n".to_string(),
    ];
    for diagram in diagrams {
        let board = Board::from_diagram(&diagram).unwrap();
        assert_eq!(board.to_diagram(), diagram);
    }
}

#[test]
fn test_diagram_errors() {
    assert_eq!(Board::from_diagram("........"), Err(BoardError::RowCount(1)));

    let short_row = "........\n.......\n........\n........\n........\n........\n........\n........";
    assert_eq!(
        Board::from_diagram(short_row),
        Err(BoardError::RowLength { row: 1, len: 7 })
    );

    let unknown = "x.......\n........\n........\n........\n........\n........\n........\n........";
    assert_eq!(Board::from_diagram(unknown), Err(BoardError::UnknownPiece('x')));

    let light = "r.......\n........\n........\n........\n........\n........\n........\n........";
    assert_eq!(
        Board::from_diagram(light),
        Err(BoardError::LightSquare(Square::new(0, 0)))
    );
}

#[test]
fn test_with_piece_returns_new_board() {
    let empty = Board::empty();
    let board = empty.with_piece(Square::new(3, 2), Piece::regular(Color::Red));
    assert!(empty.piece_at(Square::new(3, 2)).is_none());
    assert_eq!(board.piece_at(Square::new(3, 2)), Some(Piece::regular(Color::Red)));
    assert!(board.without_piece(Square::new(3, 2)).is_empty_at(Square::new(3, 2)));
}

#[test]
fn test_board_display_has_labels() {
    let text = Board::startpos().to_string();
    assert!(text.starts_with("   0 1 2 3 4 5 6 7"));
    assert!(text.contains(" 5 r . r . r . r ."));
}

// ============================================================================
// Move Tests
// ============================================================================

#[test]
fn test_simple_move() {
    let mv = Move::new(Square::new(5, 0), Square::new(4, 1));
    assert_eq!(mv.from(), Square::new(5, 0));
    assert_eq!(mv.to(), Square::new(4, 1));
    assert!(!mv.is_capture());
    assert!(mv.captured().is_empty());
    assert_eq!(mv.to_string(), "5,0-4,1");
}

#[test]
fn test_capture_move() {
    let mv = Move::new_capture(Square::new(3, 3), Square::new(1, 1), Square::new(2, 2));
    assert!(mv.is_capture());
    assert_eq!(mv.captured(), &[Square::new(2, 2)]);
    assert_eq!(mv.to_string(), "3,3x1,1");
}
