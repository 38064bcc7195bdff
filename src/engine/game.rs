//! The surface a front end talks to: read the board, forward clicks.

use super::rules::{MoveReport, RulesConfig, RulesEngine};
use super::session::{SelectionOutcome, SelectionSession};
use crate::core::board::{Board, Position, Side};
use crate::core::errors::EngineError;
use crate::core::moves::Move;

#[derive(Clone, Debug, Default)]
pub struct Game {
    engine: RulesEngine,
    session: SelectionSession,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RulesConfig) -> Self {
        Game {
            engine: RulesEngine::with_config(config),
            session: SelectionSession::new(),
        }
    }

    /// Continue from an existing engine state.
    pub fn from_engine(engine: RulesEngine) -> Self {
        Game {
            engine,
            session: SelectionSession::new(),
        }
    }

    /// Back to the starting layout; drops any pending pick.
    pub fn new_game(&mut self) {
        self.engine.setup();
        self.session.reset();
    }

    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    pub fn board_snapshot(&self) -> Board {
        self.engine.board_snapshot()
    }

    pub fn board_size(&self) -> usize {
        self.engine.board_size()
    }

    pub fn current_turn(&self) -> Side {
        self.engine.current_turn()
    }

    pub fn pending_selection(&self) -> Option<Position> {
        self.session.pending()
    }

    /// Forward one user pick.
    pub fn submit_selection(&mut self, pos: Position) -> SelectionOutcome {
        self.session.submit(&mut self.engine, pos)
    }

    /// Play a complete move, bypassing selection. Drops any pending pick.
    pub fn submit_move(&mut self, mv: Move) -> Result<MoveReport, EngineError> {
        self.session.reset();
        self.engine.submit_move(mv)
    }
}
