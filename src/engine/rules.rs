//! The rules engine: board ownership, turn management and move submission.

use super::executor::MoveExecutor;
use super::movegen::{LegalSets, MoveGen};
use crate::core::board::{Board, PieceKind, Position, Side, BOARD_SIZE};
use crate::core::errors::EngineError;
use crate::core::moves::{Move, MoveKind, MoveList};
use tracing::{debug, info};

/// Rule options. Applied when a game is set up.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RulesConfig {
    /// Side that moves first after setup.
    pub first_to_move: Side,
    /// When set, a jump that crowns a man always ends the turn. Otherwise the
    /// new king keeps capturing with king directions.
    pub crowning_ends_turn: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            first_to_move: Side::White,
            crowning_ends_turn: false,
        }
    }
}

/// Outcome of an accepted submission.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveReport {
    pub mv: Move,
    pub kind: MoveKind,
    /// Kind now standing on the destination.
    pub placed: PieceKind,
    pub captured: Option<Position>,
    pub promoted: bool,
    /// False while a capture chain continues.
    pub turn_ended: bool,
    /// Side to move after this submission.
    pub next_turn: Side,
}

#[derive(Clone, Debug)]
pub struct RulesEngine {
    board: Board,
    turn: Side,
    legal: LegalSets,
    /// Landing square of a jump whose chain is not finished yet.
    chain: Option<Position>,
    config: RulesConfig,
}

impl RulesEngine {
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        let mut engine = RulesEngine {
            board: Board::empty(),
            turn: config.first_to_move,
            legal: LegalSets::default(),
            chain: None,
            config,
        };
        engine.setup();
        engine
    }

    /// Start from an arbitrary position with `turn` to move.
    pub fn from_board(board: Board, turn: Side, config: RulesConfig) -> Self {
        let mut engine = RulesEngine {
            board,
            turn,
            legal: LegalSets::default(),
            chain: None,
            config,
        };
        engine.populate_legal_moves();
        engine
    }

    /// Put the pieces in their starting position.
    pub fn setup(&mut self) {
        self.board = Board::starting();
        self.turn = self.config.first_to_move;
        self.chain = None;
        self.populate_legal_moves();
        info!("new game, {} to move", self.turn);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    #[inline]
    pub const fn board_size(&self) -> usize {
        BOARD_SIZE
    }

    #[inline]
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn legal_moves(&self) -> &MoveList {
        &self.legal.moves
    }

    pub fn legal_jumps(&self) -> &MoveList {
        &self.legal.jumps
    }

    /// Moves that would be accepted right now.
    pub fn candidates(&self) -> &MoveList {
        self.legal.candidates()
    }

    pub fn must_jump(&self) -> bool {
        self.legal.must_jump()
    }

    /// Square the current player must keep jumping from, if a chain is open.
    pub fn chain_square(&self) -> Option<Position> {
        self.chain
    }

    pub fn is_valid_position(&self, pos: Position) -> bool {
        self.board.is_in_bounds(pos)
    }

    /// Board position for UI coordinates. The view lists columns where the
    /// board lists rows, so the pair is transposed.
    pub fn position_from_view(&self, row: i8, col: i8) -> Option<Position> {
        let pos = Position::new(col, row);
        self.is_valid_position(pos).then_some(pos)
    }

    /// Validate and play `mv` for the side to move.
    ///
    /// A jump is accepted whenever it is in the jump set. A step is accepted
    /// only if it is in the step set and no jump is available. Rejections
    /// leave the engine untouched.
    pub fn submit_move(&mut self, mv: Move) -> Result<MoveReport, EngineError> {
        debug!("attempting to move {}", mv);

        for pos in [mv.source, mv.destination] {
            if !self.is_valid_position(pos) {
                debug!("rejected {}: {} is off the board", mv, pos);
                return Err(EngineError::OutOfBounds(pos));
            }
        }

        if self.legal.jumps.contains(&mv) {
            self.jump_piece(mv)
        } else if !self.legal.must_jump() && self.legal.moves.contains(&mv) {
            self.move_piece(mv)
        } else {
            debug!("illegal move attempt {}", mv);
            Err(EngineError::IllegalMove(mv))
        }
    }

    fn move_piece(&mut self, mv: Move) -> Result<MoveReport, EngineError> {
        self.debug_check_mover(mv);
        let executed = MoveExecutor::step(&mut self.board, mv)?;
        self.switch_turns();

        Ok(MoveReport {
            mv,
            kind: MoveKind::Step,
            placed: executed.placed,
            captured: None,
            promoted: executed.promoted,
            turn_ended: true,
            next_turn: self.turn,
        })
    }

    fn jump_piece(&mut self, mv: Move) -> Result<MoveReport, EngineError> {
        self.debug_check_mover(mv);
        let executed = MoveExecutor::jump(&mut self.board, mv)?;

        self.legal.clear();
        if !(executed.promoted && self.config.crowning_ends_turn) {
            // Promotion is already on the board, so a freshly crowned piece
            // continues with king directions.
            self.legal.jumps =
                MoveGen::chain_continuations(&self.board, self.turn, mv, executed.placed.is_king());
        }

        let turn_ended = !self.legal.must_jump();
        if turn_ended {
            self.switch_turns();
        } else {
            debug!("{} continues jumping from {}", self.turn, mv.destination);
            self.chain = Some(mv.destination);
        }

        Ok(MoveReport {
            mv,
            kind: MoveKind::Jump,
            placed: executed.placed,
            captured: executed.captured.map(|(square, _)| square),
            promoted: executed.promoted,
            turn_ended,
            next_turn: self.turn,
        })
    }

    fn switch_turns(&mut self) {
        self.turn = !self.turn;
        self.chain = None;
        info!("{}'s turn", self.turn);
        self.populate_legal_moves();
    }

    fn populate_legal_moves(&mut self) {
        self.legal = MoveGen::generate(&self.board, self.turn);
        debug!(
            "{} has {} steps and {} jumps",
            self.turn,
            self.legal.moves.len(),
            self.legal.jumps.len()
        );
    }

    #[inline]
    fn debug_check_mover(&self, mv: Move) {
        debug_assert!(
            self.board.get(mv.source).is_some_and(|kind| kind.is_of(self.turn)),
            "legal move {} does not start on a {} piece",
            mv,
            self.turn
        );
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}
