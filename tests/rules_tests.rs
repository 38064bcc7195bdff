//! Rules Engine Tests
//!
//! Move submission, promotion, capture chains and turn handling.

use duck_checkers::core::board::{Board, PieceKind, Position, Side};
use duck_checkers::core::errors::EngineError;
use duck_checkers::core::moves::{Move, MoveKind};
use duck_checkers::engine::{RulesConfig, RulesEngine};

fn pos(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

fn mv(r1: i8, c1: i8, r2: i8, c2: i8) -> Move {
    Move::new(pos(r1, c1), pos(r2, c2))
}

fn engine(diagram: &str, turn: Side) -> RulesEngine {
    RulesEngine::from_board(diagram.parse().unwrap(), turn, RulesConfig::default())
}

fn assert_rejected_untouched(engine: &mut RulesEngine, m: Move, expected: EngineError) {
    let board = engine.board_snapshot();
    let turn = engine.current_turn();
    let moves = engine.legal_moves().clone();
    let jumps = engine.legal_jumps().clone();

    assert_eq!(engine.submit_move(m), Err(expected));

    assert_eq!(engine.board(), &board);
    assert_eq!(engine.current_turn(), turn);
    assert_eq!(engine.legal_moves(), &moves);
    assert_eq!(engine.legal_jumps(), &jumps);
}

// ============================================================================
// Setup
// ============================================================================

#[test]
fn test_new_engine() {
    let engine = RulesEngine::new();
    assert_eq!(engine.board(), &Board::starting());
    assert_eq!(engine.current_turn(), Side::White);
    assert_eq!(engine.board_size(), 8);
    assert_eq!(engine.legal_moves().len(), 7);
    assert!(!engine.must_jump());
    assert_eq!(engine.chain_square(), None);
}

#[test]
fn test_first_to_move_config() {
    let engine = RulesEngine::with_config(RulesConfig {
        first_to_move: Side::Black,
        ..RulesConfig::default()
    });
    assert_eq!(engine.current_turn(), Side::Black);
    assert!(engine.candidates().iter().all(|m| m.source.row == 5));
}

#[test]
fn test_setup_resets() {
    let mut engine = RulesEngine::new();
    engine.submit_move(mv(2, 1, 3, 0)).unwrap();
    engine.setup();
    assert_eq!(engine.board(), &Board::starting());
    assert_eq!(engine.current_turn(), Side::White);
}

#[test]
fn test_position_from_view_transposes() {
    let engine = RulesEngine::new();
    assert_eq!(engine.position_from_view(1, 2), Some(pos(2, 1)));
    assert_eq!(engine.position_from_view(8, 0), None);
    assert_eq!(engine.position_from_view(0, -1), None);
}

// ============================================================================
// Ordinary Moves
// ============================================================================

#[test]
fn test_white_opening_step() {
    let mut engine = RulesEngine::new();
    let report = engine.submit_move(mv(2, 1, 3, 0)).unwrap();

    assert_eq!(report.kind, MoveKind::Step);
    assert_eq!(report.placed, PieceKind::WhiteMan);
    assert_eq!(report.captured, None);
    assert!(!report.promoted);
    assert!(report.turn_ended);
    assert_eq!(report.next_turn, Side::Black);

    assert_eq!(engine.board().get(pos(3, 0)), Some(PieceKind::WhiteMan));
    assert_eq!(engine.board().get(pos(2, 1)), Some(PieceKind::Empty));
    assert_eq!(engine.current_turn(), Side::Black);
    assert_eq!(engine.legal_moves().len(), 7);
}

#[test]
fn test_steps_alternate_turns() {
    let mut engine = RulesEngine::new();
    engine.submit_move(mv(2, 1, 3, 0)).unwrap();
    engine.submit_move(mv(5, 2, 4, 3)).unwrap();
    assert_eq!(engine.current_turn(), Side::White);
}

#[test]
fn test_empty_source_rejected() {
    let mut engine = RulesEngine::new();
    assert_rejected_untouched(&mut engine, mv(3, 0, 4, 1), EngineError::IllegalMove(mv(3, 0, 4, 1)));
    assert_rejected_untouched(&mut engine, mv(4, 3, 3, 2), EngineError::IllegalMove(mv(4, 3, 3, 2)));
}

#[test]
fn test_opponent_piece_rejected() {
    let mut engine = RulesEngine::new();
    assert_rejected_untouched(&mut engine, mv(5, 0, 4, 1), EngineError::IllegalMove(mv(5, 0, 4, 1)));
}

#[test]
fn test_backwards_man_step_rejected() {
    let mut engine = engine("8/8/8/2w5/8/8/8/8", Side::White);
    assert_rejected_untouched(&mut engine, mv(3, 2, 2, 1), EngineError::IllegalMove(mv(3, 2, 2, 1)));
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut engine = RulesEngine::new();
    assert_rejected_untouched(&mut engine, mv(2, 7, 3, 8), EngineError::OutOfBounds(pos(3, 8)));
    assert_rejected_untouched(&mut engine, mv(-1, 0, 0, 1), EngineError::OutOfBounds(pos(-1, 0)));
}

// ============================================================================
// Jumps and Mandatory Capture
// ============================================================================

#[test]
fn test_black_jump_forward() {
    let mut engine = engine("8/8/8/8/3w4/2b5/8/8", Side::Black);
    let report = engine.submit_move(mv(5, 2, 3, 4)).unwrap();

    assert_eq!(report.kind, MoveKind::Jump);
    assert_eq!(report.captured, Some(pos(4, 3)));
    assert_eq!(engine.board().get(pos(4, 3)), Some(PieceKind::Empty));
    assert_eq!(engine.board().get(pos(5, 2)), Some(PieceKind::Empty));
    assert_eq!(engine.board().get(pos(3, 4)), Some(PieceKind::BlackMan));
    assert_eq!(engine.board().count_side(Side::White), 0);
}

#[test]
fn test_king_jump_then_edge_ends_turn() {
    // Black king on (3, 4) takes (4, 5). The white piece on (6, 7) cannot be
    // taken since the landing square would be off the board.
    let mut engine = engine("8/8/8/4B3/5w2/8/7w/8", Side::Black);
    let report = engine.submit_move(mv(3, 4, 5, 6)).unwrap();

    assert_eq!(report.captured, Some(pos(4, 5)));
    assert_eq!(report.placed, PieceKind::BlackKing);
    assert!(report.turn_ended);
    assert_eq!(engine.board().get(pos(4, 5)), Some(PieceKind::Empty));
    assert_eq!(engine.board().get(pos(5, 6)), Some(PieceKind::BlackKing));
    assert_eq!(engine.current_turn(), Side::White);
}

#[test]
fn test_step_refused_while_jump_available() {
    let mut engine = engine("8/6w1/1w6/2b5/8/8/8/8", Side::White);
    assert!(engine.must_jump());
    assert!(engine.legal_moves().contains(&mv(1, 6, 2, 5)));

    assert_rejected_untouched(&mut engine, mv(1, 6, 2, 5), EngineError::IllegalMove(mv(1, 6, 2, 5)));
    assert_rejected_untouched(&mut engine, mv(2, 1, 3, 0), EngineError::IllegalMove(mv(2, 1, 3, 0)));

    let report = engine.submit_move(mv(2, 1, 4, 3)).unwrap();
    assert!(report.turn_ended);
    assert_eq!(engine.current_turn(), Side::Black);
}

// ============================================================================
// Promotion
// ============================================================================

#[test]
fn test_white_promotes_on_step() {
    let mut engine = engine("8/8/8/8/8/8/1w6/8", Side::White);
    let report = engine.submit_move(mv(6, 1, 7, 0)).unwrap();
    assert!(report.promoted);
    assert_eq!(report.placed, PieceKind::WhiteKing);
    assert_eq!(engine.board().get(pos(7, 0)), Some(PieceKind::WhiteKing));
}

#[test]
fn test_black_promotes_on_step() {
    let mut engine = engine("8/2b5/8/8/8/8/8/8", Side::Black);
    let report = engine.submit_move(mv(1, 2, 0, 1)).unwrap();
    assert!(report.promoted);
    assert_eq!(engine.board().get(pos(0, 1)), Some(PieceKind::BlackKing));
}

#[test]
fn test_promotes_on_jump() {
    let mut engine = engine("8/8/8/8/8/2w5/3b4/8", Side::White);
    let report = engine.submit_move(mv(5, 2, 7, 4)).unwrap();
    assert!(report.promoted);
    assert_eq!(report.captured, Some(pos(6, 3)));
    assert_eq!(engine.board().get(pos(7, 4)), Some(PieceKind::WhiteKing));
    assert!(report.turn_ended);
}

#[test]
fn test_kings_never_depromote() {
    let mut engine = engine("8/2W5/8/8/8/8/5B2/8", Side::White);
    let report = engine.submit_move(mv(1, 2, 0, 1)).unwrap();
    assert_eq!(report.placed, PieceKind::WhiteKing);
    assert!(!report.promoted);

    let report = engine.submit_move(mv(6, 5, 7, 4)).unwrap();
    assert_eq!(report.placed, PieceKind::BlackKing);
    assert!(!report.promoted);
}

// ============================================================================
// Capture Chains
// ============================================================================

#[test]
fn test_chain_continues_same_direction() {
    let mut engine = engine("7w/2w5/3b4/8/5b2/8/8/8", Side::White);
    let first = engine.submit_move(mv(1, 2, 3, 4)).unwrap();

    assert!(!first.turn_ended);
    assert_eq!(first.next_turn, Side::White);
    assert_eq!(engine.current_turn(), Side::White);
    assert_eq!(engine.chain_square(), Some(pos(3, 4)));
    assert_eq!(engine.legal_jumps().as_slice(), &[mv(3, 4, 5, 6)]);
    assert!(engine.legal_moves().is_empty());

    // Other pieces may not move while the chain is open.
    assert_rejected_untouched(&mut engine, mv(0, 7, 1, 6), EngineError::IllegalMove(mv(0, 7, 1, 6)));

    let second = engine.submit_move(mv(3, 4, 5, 6)).unwrap();
    assert!(second.turn_ended);
    assert_eq!(engine.current_turn(), Side::Black);
    assert_eq!(engine.chain_square(), None);
    assert_eq!(engine.board().count_side(Side::Black), 0);
}

#[test]
fn test_chain_continues_mirrored_direction() {
    let mut engine = engine("8/2w5/3b4/8/3b4/8/8/8", Side::White);
    let report = engine.submit_move(mv(1, 2, 3, 4)).unwrap();
    assert!(!report.turn_ended);
    assert_eq!(engine.legal_jumps().as_slice(), &[mv(3, 4, 5, 2)]);
}

#[test]
fn test_man_chain_does_not_turn_back() {
    let mut engine = engine("8/2w5/3b1b2/8/8/8/8/8", Side::White);
    let report = engine.submit_move(mv(1, 2, 3, 4)).unwrap();
    assert!(report.turn_ended);
    assert_eq!(engine.current_turn(), Side::Black);
}

#[test]
fn test_king_chain_turns_back() {
    let mut engine = engine("8/2W5/3b1b2/8/8/8/8/8", Side::White);
    let report = engine.submit_move(mv(1, 2, 3, 4)).unwrap();
    assert!(!report.turn_ended);
    assert_eq!(engine.legal_jumps().as_slice(), &[mv(3, 4, 1, 6)]);

    engine.submit_move(mv(3, 4, 1, 6)).unwrap();
    assert_eq!(engine.current_turn(), Side::Black);
}

#[test]
fn test_crowned_jumper_continues_as_king() {
    let mut engine = engine("8/8/8/8/8/2w5/3b1b2/8", Side::White);
    let report = engine.submit_move(mv(5, 2, 7, 4)).unwrap();

    assert!(report.promoted);
    assert!(!report.turn_ended);
    assert_eq!(engine.legal_jumps().as_slice(), &[mv(7, 4, 5, 6)]);

    let report = engine.submit_move(mv(7, 4, 5, 6)).unwrap();
    assert_eq!(report.placed, PieceKind::WhiteKing);
    assert!(report.turn_ended);
}

#[test]
fn test_crowning_can_end_turn() {
    let config = RulesConfig {
        crowning_ends_turn: true,
        ..RulesConfig::default()
    };
    let board: Board = "8/8/8/8/8/2w5/3b1b2/8".parse().unwrap();
    let mut engine = RulesEngine::from_board(board, Side::White, config);
    let report = engine.submit_move(mv(5, 2, 7, 4)).unwrap();

    assert!(report.promoted);
    assert!(report.turn_ended);
    assert_eq!(engine.current_turn(), Side::Black);
}
