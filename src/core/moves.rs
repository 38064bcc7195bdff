//! Move representation
//!
//! A move is just a source and a destination. Whether it is an ordinary step
//! or a jump follows from its length: one diagonal square for a step, two
//! for a jump, with the captured piece on the midpoint.

use super::board::Position;
use std::fmt;

/// A diagonal unit vector.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Direction {
    pub vertical: i8,
    pub horizontal: i8,
}

impl Direction {
    pub const NORTH_WEST: Direction = Direction::new(-1, -1);
    pub const NORTH_EAST: Direction = Direction::new(-1, 1);
    pub const SOUTH_WEST: Direction = Direction::new(1, -1);
    pub const SOUTH_EAST: Direction = Direction::new(1, 1);

    /// Scan order used by move generation.
    pub const ALL: &'static [Direction] = &[
        Direction::NORTH_WEST,
        Direction::NORTH_EAST,
        Direction::SOUTH_WEST,
        Direction::SOUTH_EAST,
    ];

    /// Forward diagonals of a Black man.
    pub const NORTHWARD: &'static [Direction] = &[Direction::NORTH_WEST, Direction::NORTH_EAST];

    /// Forward diagonals of a White man.
    pub const SOUTHWARD: &'static [Direction] = &[Direction::SOUTH_WEST, Direction::SOUTH_EAST];

    #[inline]
    pub const fn new(vertical: i8, horizontal: i8) -> Self {
        Direction { vertical, horizontal }
    }

    /// Same vertical heading, opposite horizontal heading.
    #[inline]
    pub const fn mirror_horizontal(self) -> Self {
        Direction::new(self.vertical, -self.horizontal)
    }

    /// Opposite vertical heading, same horizontal heading.
    #[inline]
    pub const fn mirror_vertical(self) -> Self {
        Direction::new(-self.vertical, self.horizontal)
    }
}

/// Step or jump.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum MoveKind {
    Step,
    Jump,
}

/// A checkers move from `source` to `destination`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    pub source: Position,
    pub destination: Position,
}

impl Move {
    #[inline]
    pub const fn new(source: Position, destination: Position) -> Self {
        Move { source, destination }
    }

    /// Sign vector of the displacement; each component is -1, 0 or 1.
    #[inline]
    pub const fn direction(self) -> Direction {
        Direction::new(
            (self.destination.row - self.source.row).signum(),
            (self.destination.col - self.source.col).signum(),
        )
    }

    /// Chebyshev length of the move
    #[inline]
    pub const fn distance(self) -> i8 {
        let dr = (self.destination.row - self.source.row).abs();
        let dc = (self.destination.col - self.source.col).abs();
        if dr > dc { dr } else { dc }
    }

    #[inline]
    const fn is_diagonal(self) -> bool {
        (self.destination.row - self.source.row).abs() == (self.destination.col - self.source.col).abs()
    }

    #[inline]
    pub const fn is_step(self) -> bool {
        self.is_diagonal() && self.distance() == 1
    }

    #[inline]
    pub const fn is_jump(self) -> bool {
        self.is_diagonal() && self.distance() == 2
    }

    pub const fn kind(self) -> Option<MoveKind> {
        if self.is_step() {
            Some(MoveKind::Step)
        } else if self.is_jump() {
            Some(MoveKind::Jump)
        } else {
            None
        }
    }

    /// Square of the piece a jump captures.
    pub const fn captured(self) -> Option<Position> {
        if self.is_jump() {
            Some(self.source.offset(self.direction(), 1))
        } else {
            None
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// An ordered list of moves. Generation order is preserved.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create a new empty move list
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Match by source and destination.
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.iter().any(|m| m.source == mv.source && m.destination == mv.destination)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
