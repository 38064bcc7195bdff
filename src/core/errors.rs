//! Error types for the rules engine and the board diagram parser.

use super::board::Position;
use super::moves::Move;
use thiserror::Error;

/// Rejections reported by the engine. Both are recoverable: the board, the
/// turn and the legal sets are left exactly as they were.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A coordinate lies outside `0..8`.
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),
    /// The move is in neither legal set, or it is an ordinary move while a
    /// capture is available.
    #[error("illegal move {0}")]
    IllegalMove(Move),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected 8 rows separated by '/', found {0}")]
    WrongRowCount(usize),
    #[error("row {row} describes {width} cells, expected 8")]
    WrongRowWidth { row: usize, width: usize },
    #[error("invalid character in board diagram: '{0}'")]
    InvalidChar(char),
    #[error("piece on non-playable square {0}")]
    UnplayableSquare(Position),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid side '{0}', expected 'w' or 'b'")]
pub struct ParseSideError(pub String);
