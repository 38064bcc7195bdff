//! Two-click move selection.
//!
//! The first pick names the piece to move, the second the destination. The
//! session only talks to the engine through its public API and never fails:
//! anything unusable resets or ignores the pick.

use super::rules::{MoveReport, RulesEngine};
use crate::core::board::Position;
use crate::core::errors::EngineError;
use crate::core::moves::Move;
use tracing::debug;

/// What a single pick did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SelectionOutcome {
    /// A piece of the side to move is now the pending source.
    Selected(Position),
    /// The pending source was picked again and released.
    Deselected,
    /// Another piece of the side to move replaced the pending source.
    Reselected(Position),
    /// The pick did not name a piece of the side to move.
    Ignored(Position),
    /// The completed move was played.
    Moved(MoveReport),
    /// The completed move, or the pick itself, was rejected.
    Rejected(EngineError),
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct SelectionSession {
    source: Option<Position>,
}

impl SelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending source pick, if any.
    pub fn pending(&self) -> Option<Position> {
        self.source
    }

    pub fn reset(&mut self) {
        self.source = None;
    }

    pub fn submit(&mut self, engine: &mut RulesEngine, pos: Position) -> SelectionOutcome {
        if !engine.is_valid_position(pos) {
            debug!("selection {} is off the board", pos);
            self.reset();
            return SelectionOutcome::Rejected(EngineError::OutOfBounds(pos));
        }

        let owned = engine
            .board()
            .get(pos)
            .is_some_and(|kind| kind.is_of(engine.current_turn()));

        match self.source {
            None if owned => {
                self.source = Some(pos);
                SelectionOutcome::Selected(pos)
            }
            None => SelectionOutcome::Ignored(pos),
            Some(source) if source == pos => {
                self.reset();
                SelectionOutcome::Deselected
            }
            Some(_) if owned => {
                self.source = Some(pos);
                SelectionOutcome::Reselected(pos)
            }
            Some(source) => {
                self.reset();
                match engine.submit_move(Move::new(source, pos)) {
                    Ok(report) => SelectionOutcome::Moved(report),
                    Err(err) => SelectionOutcome::Rejected(err),
                }
            }
        }
    }
}
