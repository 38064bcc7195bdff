pub mod console;
pub mod core;
pub mod engine;

pub use console::Console;
pub use core::{Board, EngineError, Move, PieceKind, Position, Side};
pub use engine::{Game, RulesConfig, RulesEngine, SelectionOutcome};
