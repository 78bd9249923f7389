//! Property-based rule tests.
//!
//! Random move sequences are driven through `apply_move` and the
//! board invariants are checked after every step.

use proptest::prelude::*;

use mancala::rules::{apply_move, finalize, is_terminal, legal_moves, winner};
use mancala::{Board, Player};

const TOTAL_STONES: u16 = 48;

/// Play `picks` as indices into the legal-move list, stopping early
/// at a terminal position. Returns the final board.
fn play_sequence(picks: &[usize]) -> Board {
    let mut board = Board::default();
    for &pick in picks {
        if is_terminal(&board) {
            break;
        }
        let legal = legal_moves(&board);
        let pit = legal[pick % legal.len()];
        board = apply_move(&board, pit).expect("legal move rejected");
    }
    board
}

proptest! {
    /// Invariant: sowing moves stones around but never creates or
    /// destroys them.
    #[test]
    fn stones_are_conserved(picks in prop::collection::vec(0usize..6, 1..300)) {
        let board = play_sequence(&picks);
        prop_assert_eq!(board.total_stones(), TOTAL_STONES);

        let final_board = finalize(&board);
        prop_assert_eq!(final_board.total_stones(), TOTAL_STONES);
    }

    /// Invariant: a store count never decreases over a game.
    #[test]
    fn stores_are_monotone(picks in prop::collection::vec(0usize..6, 1..300)) {
        let mut board = Board::default();
        for pick in picks {
            if is_terminal(&board) {
                break;
            }
            let legal = legal_moves(&board);
            let pit = legal[pick % legal.len()];
            let next = apply_move(&board, pit).expect("legal move rejected");

            prop_assert!(next.store(Player::One) >= board.store(Player::One));
            prop_assert!(next.store(Player::Two) >= board.store(Player::Two));
            board = next;
        }
    }

    /// Invariant: every pit outside the mover's legal list is
    /// rejected, and legality never names a store or an empty pit.
    #[test]
    fn illegal_pits_always_rejected(picks in prop::collection::vec(0usize..6, 0..100)) {
        let board = play_sequence(&picks);
        if is_terminal(&board) {
            return Ok(());
        }

        let legal = legal_moves(&board);
        for pit in 0..14 {
            if legal.contains(&pit) {
                prop_assert!(board.turn.owns_pit(pit));
                prop_assert!(board.pits[pit] > 0);
            } else {
                prop_assert!(apply_move(&board, pit).is_err());
            }
        }
    }

    /// Invariant: once a side is empty the game is terminal and a
    /// result can be read; before that, `winner` stays quiet.
    #[test]
    fn winner_iff_terminal(picks in prop::collection::vec(0usize..6, 1..300)) {
        let board = play_sequence(&picks);
        prop_assert_eq!(is_terminal(&board), winner(&board).is_some());
    }

    /// Invariant: finalize is idempotent and empties every pit.
    #[test]
    fn finalize_is_idempotent(picks in prop::collection::vec(0usize..6, 1..300)) {
        let board = play_sequence(&picks);
        if !is_terminal(&board) {
            return Ok(());
        }

        let once = finalize(&board);
        let twice = finalize(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.side_empty(Player::One));
        prop_assert!(once.side_empty(Player::Two));
    }
}
