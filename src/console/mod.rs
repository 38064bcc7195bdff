//! Line-oriented text front end
//!
//! A small command protocol for playing a game from a terminal or a script:
//! the board is printed on request and picks are forwarded to the engine.

pub mod protocol;

pub use protocol::Console;
