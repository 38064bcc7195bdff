//! Checkers rules engine
//!
//! This module contains the rules and the glue around them:
//! - Legal step/jump generation
//! - Move execution with promotion and capture chains
//! - Turn management
//! - Two-click selection and the front-end facing game surface

pub mod executor;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod session;

pub use executor::{Executed, MoveExecutor};
pub use game::Game;
pub use movegen::{LegalSets, MoveGen};
pub use perft::perft;
pub use rules::{MoveReport, RulesConfig, RulesEngine};
pub use session::{SelectionOutcome, SelectionSession};
