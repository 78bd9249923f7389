//! Sowing, capture and extra-turn rules
//!
//! Sowing order is counter-clockwise by ascending cell index, wrapping
//! from 13 back to 0. The opponent's store never receives a stone, on
//! any lap, so the eligible cycle for the mover is 13 cells long.

use crate::board::{Board, NUM_CELLS};
use crate::error::GameError;

/// Pits the mover may select: their own pits holding at least one stone,
/// in increasing index order. An empty result means the mover's side is
/// exhausted, which is a terminal condition.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<usize> {
    board
        .turn
        .pit_range()
        .filter(|&pit| board.pits[pit] > 0)
        .collect()
}

/// Apply a move for the player to move, producing the resulting board.
///
/// Errors with `IllegalMove` when `pit` is a store, not the mover's, or
/// empty. The error is never silently corrected; callers pre-filter with
/// [`legal_moves`].
///
/// Rule interactions, in order:
/// 1. All stones are lifted from `pit` and sown one per cell counter-
///    clockwise, skipping the opponent's store on every lap.
/// 2. If the last stone lands in one of the mover's own pits that now
///    holds exactly one stone (it was empty before that stone) and the
///    opposite pit (`12 - last`) is non-empty, both pits are emptied
///    into the mover's store.
/// 3. If the last stone lands in the mover's store, the mover keeps the
///    turn; otherwise the turn flips.
pub fn apply_move(board: &Board, pit: usize) -> Result<Board, GameError> {
    let mover = board.turn;
    if !mover.owns_pit(pit) || board.pits[pit] == 0 {
        return Err(GameError::IllegalMove { pit, player: mover });
    }

    let mut next = board.clone();
    let skip = mover.opponent().store_index();
    let own_store = mover.store_index();

    let mut remaining = next.pits[pit];
    next.pits[pit] = 0;

    let mut idx = pit;
    while remaining > 0 {
        idx = (idx + 1) % NUM_CELLS;
        if idx == skip {
            continue;
        }
        next.pits[idx] += 1;
        remaining -= 1;
    }

    if idx == own_store {
        // Extra turn: mover goes again
        return Ok(next);
    }

    // Capture: landing pit was empty before this stone arrived. The check
    // also covers a full-lap sow landing back on the (emptied) source pit.
    if mover.owns_pit(idx) && next.pits[idx] == 1 {
        let opposite = 12 - idx;
        if next.pits[opposite] > 0 {
            next.pits[own_store] += next.pits[idx] + next.pits[opposite];
            next.pits[idx] = 0;
            next.pits[opposite] = 0;
        }
    }

    next.turn = mover.opponent();
    Ok(next)
}
