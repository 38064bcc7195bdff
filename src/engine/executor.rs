//! Board writes for steps and jumps, including promotion.
//!
//! The executor only touches the board. Validation against the legal sets,
//! turn toggling and regeneration belong to [`RulesEngine`](super::RulesEngine).

use crate::core::board::{Board, PieceKind, Position};
use crate::core::errors::EngineError;
use crate::core::moves::Move;

/// What a single executed move did to the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Executed {
    /// Kind now standing on the destination square.
    pub placed: PieceKind,
    /// The move turned a man into a king.
    pub promoted: bool,
    /// Square and previous occupant of the captured piece, for jumps.
    pub captured: Option<(Position, PieceKind)>,
}

pub struct MoveExecutor;

impl MoveExecutor {
    /// Kind the moving piece has once it stands on `destination`. A man is
    /// crowned on its side's king row; kings stay kings.
    pub fn promoted_kind(kind: PieceKind, destination: Position) -> PieceKind {
        match kind.side() {
            Some(side) if destination.row == side.king_row() => kind.crowned(),
            _ => kind,
        }
    }

    /// Relocate the piece on `mv.source` to `mv.destination`.
    pub fn step(board: &mut Board, mv: Move) -> Result<Executed, EngineError> {
        let moving = Self::lift(board, mv)?;
        let placed = Self::place(board, mv, moving)?;

        Ok(Executed {
            placed,
            promoted: placed != moving,
            captured: None,
        })
    }

    /// Relocate the piece and remove the piece on the midpoint.
    pub fn jump(board: &mut Board, mv: Move) -> Result<Executed, EngineError> {
        let square = mv.captured().ok_or(EngineError::IllegalMove(mv))?;
        let victim = board.get(square).ok_or(EngineError::OutOfBounds(square))?;
        debug_assert!(!victim.is_empty(), "jump {} captures an empty square", mv);

        let moving = Self::lift(board, mv)?;
        let placed = Self::place(board, mv, moving)?;
        board.set(square, PieceKind::Empty)?;

        Ok(Executed {
            placed,
            promoted: placed != moving,
            captured: Some((square, victim)),
        })
    }

    fn lift(board: &Board, mv: Move) -> Result<PieceKind, EngineError> {
        let moving = board.get(mv.source).ok_or(EngineError::OutOfBounds(mv.source))?;
        debug_assert!(!moving.is_empty(), "legal move {} starts on an empty square", mv);
        if moving.is_empty() {
            return Err(EngineError::IllegalMove(mv));
        }
        Ok(moving)
    }

    fn place(board: &mut Board, mv: Move, moving: PieceKind) -> Result<PieceKind, EngineError> {
        let placed = Self::promoted_kind(moving, mv.destination);
        board.set(mv.destination, placed)?;
        board.set(mv.source, PieceKind::Empty)?;
        Ok(placed)
    }
}
