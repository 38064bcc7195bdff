//! Checkers board representation
//!
//! The board is a plain 8x8 grid of [`PieceKind`]. Rows grow southwards:
//! White starts on rows 0-2 and moves towards row 7, Black starts on rows 5-7
//! and moves towards row 0. Only squares where `row + col` is odd are played on.

use super::errors::{EngineError, ParseBoardError, ParseSideError};
use super::moves::Direction;
use std::fmt;
use std::str::FromStr;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 8;

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: usize = 12;

/// A board coordinate.
///
/// Coordinates are signed so that positions computed off the edge of the
/// board stay representable and can be rejected instead of wrapping.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    /// Both coordinates in `0..8`.
    #[inline]
    pub const fn is_in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE as i8 && self.col >= 0 && self.col < BOARD_SIZE as i8
    }

    /// Dark square of the standard colouring.
    #[inline]
    pub const fn is_playable(self) -> bool {
        self.is_in_bounds() && (self.row + self.col) % 2 == 1
    }

    /// The position `distance` steps away along `direction`.
    #[inline]
    pub const fn offset(self, direction: Direction, distance: i8) -> Self {
        Position {
            row: self.row + direction.vertical * distance,
            col: self.col + direction.horizontal * distance,
        }
    }

    #[inline]
    fn cell(self) -> Option<(usize, usize)> {
        if self.is_in_bounds() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The two players.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Row delta of a forward step (Black moves north, White moves south)
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Black => -1,
            Side::White => 1,
        }
    }

    /// Row on which this side's men are crowned
    #[inline]
    pub const fn king_row(self) -> i8 {
        match self {
            Side::Black => 0,
            Side::White => BOARD_SIZE as i8 - 1,
        }
    }
}

impl std::ops::Not for Side {
    type Output = Side;
    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Side::Black),
            "w" | "white" => Ok(Side::White),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// Content of a single cell. `Empty` is an occupant like any other so the
/// grid is always fully populated.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub enum PieceKind {
    BlackMan,
    WhiteMan,
    BlackKing,
    WhiteKing,
    #[default]
    Empty,
}

impl PieceKind {
    pub const fn side(self) -> Option<Side> {
        match self {
            PieceKind::BlackMan | PieceKind::BlackKing => Some(Side::Black),
            PieceKind::WhiteMan | PieceKind::WhiteKing => Some(Side::White),
            PieceKind::Empty => None,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, PieceKind::Empty)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceKind::BlackKing | PieceKind::WhiteKing)
    }

    /// Whether the piece belongs to `side`.
    #[inline]
    pub fn is_of(self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// The king of the same colour. Kings and `Empty` are returned unchanged.
    pub const fn crowned(self) -> Self {
        match self {
            PieceKind::BlackMan => PieceKind::BlackKing,
            PieceKind::WhiteMan => PieceKind::WhiteKing,
            other => other,
        }
    }

    /// Diagonals this piece may move and capture along.
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            PieceKind::BlackMan => Direction::NORTHWARD,
            PieceKind::WhiteMan => Direction::SOUTHWARD,
            PieceKind::BlackKing | PieceKind::WhiteKing => Direction::ALL,
            PieceKind::Empty => &[],
        }
    }

    /// Diagram character: lowercase men, uppercase kings.
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::BlackMan => 'b',
            PieceKind::WhiteMan => 'w',
            PieceKind::BlackKing => 'B',
            PieceKind::WhiteKing => 'W',
            PieceKind::Empty => '.',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(PieceKind::BlackMan),
            'w' => Some(PieceKind::WhiteMan),
            'B' => Some(PieceKind::BlackKing),
            'W' => Some(PieceKind::WhiteKing),
            _ => None,
        }
    }
}

/// The checkers board state
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[PieceKind; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn empty() -> Self {
        Board {
            cells: [[PieceKind::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard opening layout: White men on the playable squares of rows
    /// 0-2, Black men on rows 5-7, rows 3-4 empty.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (row, line) in board.cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                if (row + col) % 2 == 0 {
                    continue;
                }
                *cell = if row > 4 {
                    PieceKind::BlackMan
                } else if row < 3 {
                    PieceKind::WhiteMan
                } else {
                    PieceKind::Empty
                };
            }
        }
        board
    }

    #[inline]
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.is_in_bounds()
    }

    /// Content of `pos`, or `None` when it is off the board.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<PieceKind> {
        pos.cell().map(|(row, col)| self.cells[row][col])
    }

    /// Unconditional write, no rule checking.
    pub fn set(&mut self, pos: Position, kind: PieceKind) -> Result<(), EngineError> {
        let (row, col) = pos.cell().ok_or(EngineError::OutOfBounds(pos))?;
        self.cells[row][col] = kind;
        Ok(())
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, PieceKind)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter().enumerate().filter_map(move |(col, &kind)| {
                (!kind.is_empty()).then(|| (Position::new(row as i8, col as i8), kind))
            })
        })
    }

    pub fn count(&self, kind: PieceKind) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell == kind).count()
    }

    pub fn count_side(&self, side: Side) -> usize {
        self.pieces().filter(|(_, kind)| kind.is_of(side)).count()
    }

    /// Parse a board diagram.
    ///
    /// Rows are listed from row 0 to row 7 and separated by `/`. Men are
    /// `w`/`b`, kings `W`/`B`, and a digit skips that many empty cells, e.g.
    /// the opening layout is
    /// `1w1w1w1w/w1w1w1w1/1w1w1w1w/8/8/b1b1b1b1/1b1b1b1b/b1b1b1b1`.
    pub fn from_diagram(diagram: &str) -> Result<Self, ParseBoardError> {
        let rows: Vec<&str> = diagram.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::WrongRowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(ParseBoardError::InvalidChar(c))?;
                if col < BOARD_SIZE {
                    let pos = Position::new(row as i8, col as i8);
                    if !pos.is_playable() {
                        return Err(ParseBoardError::UnplayableSquare(pos));
                    }
                    board.cells[row][col] = kind;
                }
                col += 1;
            }
            if col != BOARD_SIZE {
                return Err(ParseBoardError::WrongRowWidth { row, width: col });
            }
        }

        Ok(board)
    }

    /// Convert the board to diagram notation
    pub fn to_diagram(&self) -> String {
        let mut diagram = String::new();

        for (row, line) in self.cells.iter().enumerate() {
            let mut empty = 0;
            for &kind in line {
                if kind.is_empty() {
                    empty += 1;
                    continue;
                }
                if empty > 0 {
                    diagram.push_str(&empty.to_string());
                    empty = 0;
                }
                diagram.push(kind.to_char());
            }
            if empty > 0 {
                diagram.push_str(&empty.to_string());
            }
            if row + 1 < BOARD_SIZE {
                diagram.push('/');
            }
        }

        diagram
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_diagram(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "    0 1 2 3 4 5 6 7")?;
        for (row, line) in self.cells.iter().enumerate() {
            write!(f, "  {} ", row)?;
            for kind in line {
                write!(f, "{} ", kind.to_char())?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "  Diagram: {}", self.to_diagram())?;
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
