//! Core checkers types
//!
//! This module contains the building blocks the rules engine works on:
//! - Board, positions, sides and piece kinds
//! - Move and direction representation
//! - Error types

pub mod board;
pub mod errors;
pub mod moves;

pub use board::{Board, PieceKind, Position, Side, BOARD_SIZE, PIECES_PER_SIDE};
pub use errors::{EngineError, ParseBoardError, ParseSideError};
pub use moves::{Direction, Move, MoveKind, MoveList};
