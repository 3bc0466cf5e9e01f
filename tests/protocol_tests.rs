//! Text Protocol Tests
//!
//! These tests drive `Session` with scripted input and inspect the output.

use std::io::Cursor;
use std::time::Duration;

use checkers::core::board::{Board, Color, Square};
use checkers::engine::search::Searcher;
use checkers::{Game, GameMode, Session};

fn session(mode: GameMode) -> Session {
    Session::new(mode).with_think_delay(Duration::ZERO)
}

fn send(session: &mut Session, line: &str) -> String {
    let mut out = Vec::new();
    assert!(session.handle_line(line, &mut out).unwrap());
    String::from_utf8(out).unwrap()
}

// ============================================================================
// Command Tests
// ============================================================================

#[test]
fn test_quit_ends_session() {
    let mut session = session(GameMode::TwoPlayer);
    let mut out = Vec::new();
    assert!(!session.handle_line("quit", &mut out).unwrap());
    assert!(!session.handle_line("exit", &mut out).unwrap());
}

#[test]
fn test_unknown_command() {
    let mut session = session(GameMode::TwoPlayer);
    let out = send(&mut session, "castle");
    assert_eq!(out, "error: unknown command 'castle' (try help)\n");
}

#[test]
fn test_help_lists_commands() {
    let mut session = session(GameMode::TwoPlayer);
    let out = send(&mut session, "help");
    for command in ["new", "mode", "select", "move", "click", "go", "quit"] {
        assert!(out.contains(command), "help is missing {command}");
    }
}

#[test]
fn test_display_shows_board() {
    let mut session = session(GameMode::TwoPlayer);
    let out = send(&mut session, "d");
    assert_eq!(out, format!("{}\n", Board::startpos()));
}

#[test]
fn test_status() {
    let mut session = session(GameMode::Computer);
    let out = send(&mut session, "status");
    assert_eq!(out, "mode computer\nturn red\nmust-capture false\n");
}

#[test]
fn test_select_prints_targets() {
    let mut session = session(GameMode::TwoPlayer);
    assert_eq!(send(&mut session, "select 5,2"), "targets 4,1 4,3\n");
    assert_eq!(session.game.selected(), Some(Square::new(5, 2)));
}

#[test]
fn test_rejected_commands_report_errors() {
    let mut session = session(GameMode::TwoPlayer);
    assert_eq!(send(&mut session, "select 4,1"), "error: No piece on 4,1\n");
    assert!(send(&mut session, "select 9,9").starts_with("error: "));
    assert!(send(&mut session, "move 5,0").starts_with("error: "));
    assert_eq!(
        send(&mut session, "move 5,0 3,2"),
        "error: Illegal move 5,0 -> 3,2\n"
    );
    assert!(send(&mut session, "mode chess").starts_with("error: Unknown game mode"));
    assert_eq!(session.game.board(), &Board::startpos());
}

#[test]
fn test_moves_lists_movable_pieces() {
    let mut session = session(GameMode::TwoPlayer);
    let out = send(&mut session, "moves");
    assert_eq!(out.lines().count(), 4);
    assert!(out.starts_with("5,0: 4,1\n5,2: 4,1 4,3\n"));
}

#[test]
fn test_eval() {
    let mut session = session(GameMode::TwoPlayer);
    assert_eq!(send(&mut session, "eval"), "evaluation 0 (positive favors black)\n");
}

#[test]
fn test_go_reports_black_move() {
    let mut session = session(GameMode::TwoPlayer);
    let out = send(&mut session, "go");
    let mut lines = out.lines();
    let best = lines.next().unwrap();
    assert!(best.starts_with("bestmove 2,"), "{best}");
    assert!(lines.next().unwrap().starts_with("info nodes "));
    assert_eq!(session.game.board(), &Board::startpos());
}

#[test]
fn test_go_without_moves() {
    let mut session = session(GameMode::TwoPlayer);
    session.game = Game::from_board(
        Board::empty().with_piece(Square::new(5, 0), checkers::Piece::regular(Color::Red)),
        Color::Red,
        GameMode::TwoPlayer,
    );
    assert!(send(&mut session, "go").starts_with("bestmove none\n"));
}

// ============================================================================
// Play Tests
// ============================================================================

#[test]
fn test_two_player_move() {
    let mut session = session(GameMode::TwoPlayer);
    let out = send(&mut session, "move 5,0 4,1");
    assert!(out.starts_with("played 5,0-4,1\n"));
    assert!(out.ends_with("turn black\n"));
    assert!(!out.contains("computer"));
    assert_eq!(session.game.turn(), Color::Black);
}

#[test]
fn test_computer_replies() {
    let mut session = session(GameMode::Computer);
    let out = send(&mut session, "move 5,0 4,1");
    assert!(out.contains("\ncomputer 2,"), "{out}");
    assert_eq!(session.game.turn(), Color::Red);
    assert_eq!(session.game.board().count(Color::Black), 12);
}

#[test]
fn test_click_flow() {
    let mut session = session(GameMode::TwoPlayer);
    assert_eq!(send(&mut session, "click 5,2"), "selected 5,2 targets 4,1 4,3\n");
    assert_eq!(send(&mut session, "click 3,0"), "selection cleared\n");
    send(&mut session, "click 5,2");
    let out = send(&mut session, "click 4,3");
    assert!(out.starts_with("played to 4,3\n"));
    assert!(out.ends_with("turn black\n"));
}

#[test]
fn test_capture_chain_output() {
    let mut session = session(GameMode::TwoPlayer);
    let board = Board::from_diagram(
        ".......b\n\
         ........\n\
         ...b....\n\
         ........\n\
         .b......\n\
         r.......\n\
         ........\n\
         ........\n",
    )
    .unwrap();
    session.game = Game::from_board(board, Color::Red, GameMode::TwoPlayer);

    assert!(send(&mut session, "status").contains("must-capture true"));
    assert_eq!(send(&mut session, "move 5,0 3,2"), "played 5,0-3,2\ncontinue 3,2 targets 1,4\n");
    assert!(send(&mut session, "status").contains("chain 3,2"));
    assert!(send(&mut session, "move 3,2 1,4").ends_with("turn black\n"));
}

#[test]
fn test_winning_move_output() {
    let mut session = session(GameMode::TwoPlayer);
    let board = Board::from_diagram(
        "........\n\
         ........\n\
         ...b....\n\
         ..r.....\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n",
    )
    .unwrap();
    session.game = Game::from_board(board, Color::Red, GameMode::TwoPlayer);

    let out = send(&mut session, "move 3,2 1,4");
    assert!(out.ends_with("winner red\n"));
    assert_eq!(send(&mut session, "select 1,4"), "error: Game over: red has won\n");
}

#[test]
fn test_new_and_mode_restart() {
    let mut session = session(GameMode::TwoPlayer);
    send(&mut session, "move 5,0 4,1");

    let out = send(&mut session, "new computer");
    assert!(out.ends_with("turn red\n"));
    assert_eq!(session.game.mode(), GameMode::Computer);
    assert_eq!(session.game.board(), &Board::startpos());

    assert_eq!(send(&mut session, "mode"), "mode computer\n");
    assert_eq!(send(&mut session, "mode 2p"), "mode two-player\nturn red\n");
    assert_eq!(session.game.mode(), GameMode::TwoPlayer);
}

// ============================================================================
// Session Loop Tests
// ============================================================================

#[test]
fn test_run_scripted_game() {
    let mut session = Session::new(GameMode::Computer)
        .with_searcher(Searcher::new().with_tie_break(|_len: usize| 0))
        .with_think_delay(Duration::ZERO);
    let input = Cursor::new("\nmove 5,0 4,1\n\nstatus\nquit\nmove 5,2 4,3\n");
    let mut out = Vec::new();
    session.run(input, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("   0 1 2 3 4 5 6 7\n"));
    assert!(text.contains("played 5,0-4,1\n"));
    assert!(text.contains("computer "));
    assert!(text.contains("mode computer\n"));
    assert!(!text.contains("played 5,2-4,3"));
}

#[test]
fn test_run_stops_at_end_of_input() {
    let mut session = session(GameMode::TwoPlayer);
    let mut out = Vec::new();
    session.run(Cursor::new("d\n"), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with(&format!("{}\n", Board::startpos())));
}
