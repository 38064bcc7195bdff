//! Move path enumeration for checking move generation.

use super::rules::RulesEngine;

/// Number of submission sequences of length `depth` from `engine`.
///
/// Every submission counts as one ply, so each jump of a chain is a ply of
/// its own.
pub fn perft(engine: &RulesEngine, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = engine.candidates();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .filter_map(|&mv| {
            let mut next = engine.clone();
            next.submit_move(mv).ok().map(|_| perft(&next, depth - 1))
        })
        .sum()
}
