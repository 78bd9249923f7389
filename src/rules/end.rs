//! Game-end detection, final sweep and winner determination

use crate::board::{Board, Player};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// True when either player's six pits are all empty
#[inline]
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    board.side_empty(Player::One) || board.side_empty(Player::Two)
}

/// Sweep each side's remaining pit stones into that side's own store.
///
/// Applied once a terminal state is reached, before the final store
/// totals are displayed. Idempotent.
#[must_use]
pub fn finalize(board: &Board) -> Board {
    let mut next = board.clone();
    for player in [Player::One, Player::Two] {
        let store = player.store_index();
        for pit in player.pit_range() {
            next.pits[store] += next.pits[pit];
            next.pits[pit] = 0;
        }
    }
    next
}

/// Winner of a terminal position, `None` while the game is still going.
///
/// Totals are store + remaining side stones, so the answer is the same
/// whether or not [`finalize`] has swept the board yet.
#[must_use]
pub fn winner(board: &Board) -> Option<Outcome> {
    if !is_terminal(board) {
        return None;
    }
    let p1 = board.store(Player::One) + board.side_stones(Player::One);
    let p2 = board.store(Player::Two) + board.side_stones(Player::Two);
    Some(match p1.cmp(&p2) {
        std::cmp::Ordering::Greater => Outcome::Win(Player::One),
        std::cmp::Ordering::Less => Outcome::Win(Player::Two),
        std::cmp::Ordering::Equal => Outcome::Draw,
    })
}
