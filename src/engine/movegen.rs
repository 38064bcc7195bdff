//! Legal move generation
//!
//! Produces, for the side to move, two ordered sets:
//! - ordinary one-square steps into empty cells
//! - jumps over an adjacent enemy piece into the empty cell behind it
//!
//! Captures are mandatory: as soon as the jump set is non-empty the step set
//! must not be used to validate a submission. Generation is row-major and
//! follows the direction order of [`PieceKind::directions`], so the output is
//! deterministic.

use crate::core::board::{Board, PieceKind, Position, Side};
use crate::core::moves::{Direction, Move, MoveList};
use tracing::trace;

/// Legal steps and jumps for one turn context.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct LegalSets {
    pub moves: MoveList,
    pub jumps: MoveList,
}

impl LegalSets {
    /// Whether a capture is compulsory.
    #[inline]
    pub fn must_jump(&self) -> bool {
        !self.jumps.is_empty()
    }

    /// The moves a player may actually submit.
    #[inline]
    pub fn candidates(&self) -> &MoveList {
        if self.must_jump() { &self.jumps } else { &self.moves }
    }

    pub fn clear(&mut self) {
        self.moves.clear();
        self.jumps.clear();
    }
}

/// Stateless move generator
pub struct MoveGen;

impl MoveGen {
    /// Full regeneration for `side`.
    pub fn generate(board: &Board, side: Side) -> LegalSets {
        let mut sets = LegalSets::default();

        for (from, kind) in board.pieces() {
            if !kind.is_of(side) {
                continue;
            }
            trace!("evaluating moves for {}", from);
            for &direction in kind.directions() {
                Self::add_step(board, from, direction, &mut sets.moves);
                Self::add_jump(board, side, from, direction, &mut sets.jumps);
            }
        }

        sets
    }

    /// Push the step from `from` along `direction` if the target is empty.
    pub fn add_step(board: &Board, from: Position, direction: Direction, moves: &mut MoveList) {
        let target = from.offset(direction, 1);
        if board.get(target) == Some(PieceKind::Empty) {
            trace!("added step {} -> {}", from, target);
            moves.push(Move::new(from, target));
        }
    }

    /// Push the jump from `from` along `direction` if the middle square holds
    /// a piece of the opponent of `side` and the landing square is empty.
    pub fn add_jump(board: &Board, side: Side, from: Position, direction: Direction, jumps: &mut MoveList) {
        let middle = from.offset(direction, 1);
        let landing = from.offset(direction, 2);

        let (Some(over), Some(onto)) = (board.get(middle), board.get(landing)) else {
            return;
        };

        if over.is_of(side.opposite()) && onto.is_empty() {
            trace!("added jump {} -> {}", from, landing);
            jumps.push(Move::new(from, landing));
        }
    }

    /// Follow-up jumps from the landing square of `jump`, which has already
    /// been executed on `board`.
    ///
    /// Looks along the jump's own direction and its horizontal mirror. With
    /// `king_directions` the vertical mirror is checked as well; the fourth
    /// diagonal leads back over the square just emptied and can never capture.
    pub fn chain_continuations(board: &Board, side: Side, jump: Move, king_directions: bool) -> MoveList {
        let mut jumps = MoveList::new();
        let from = jump.destination;
        let direction = jump.direction();

        Self::add_jump(board, side, from, direction, &mut jumps);
        Self::add_jump(board, side, from, direction.mirror_horizontal(), &mut jumps);
        if king_directions {
            Self::add_jump(board, side, from, direction.mirror_vertical(), &mut jumps);
        }

        jumps
    }
}
