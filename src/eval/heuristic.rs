//! Heuristic evaluation of Kalah positions
//!
//! A score is always from the given perspective player's point of view:
//! positive favors them, negative favors the opponent. Terminal positions
//! short-circuit to the `Weight::WIN` sentinel so the search always
//! prefers a certain win over any heuristic score.

use crate::board::{Board, Player};
use crate::rules::{is_terminal, winner, Outcome};

use super::weights::Weight;

/// Selectable evaluation strategy.
///
/// `Balanced` is the default. `Aggressive` weights capture and extra-turn
/// opportunities, trading safety for tempo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    #[default]
    Balanced,
    Aggressive,
}

impl Heuristic {
    /// Score `board` from `perspective`'s point of view.
    #[must_use]
    pub fn evaluate(self, board: &Board, perspective: Player) -> f64 {
        if is_terminal(board) {
            return terminal_score(board, perspective);
        }
        match self {
            Heuristic::Balanced => balanced(board, perspective),
            Heuristic::Aggressive => aggressive(board, perspective),
        }
    }
}

/// Score with the default balanced heuristic.
#[inline]
#[must_use]
pub fn evaluate(board: &Board, perspective: Player) -> f64 {
    Heuristic::Balanced.evaluate(board, perspective)
}

fn terminal_score(board: &Board, perspective: Player) -> f64 {
    match winner(board) {
        Some(Outcome::Win(player)) if player == perspective => Weight::WIN,
        Some(Outcome::Win(_)) => -Weight::WIN,
        _ => 0.0,
    }
}

fn balanced(board: &Board, perspective: Player) -> f64 {
    let opponent = perspective.opponent();
    let store_diff = f64::from(board.store(perspective)) - f64::from(board.store(opponent));
    let side_diff =
        f64::from(board.side_stones(perspective)) - f64::from(board.side_stones(opponent));
    store_diff * Weight::STORE_DIFF + side_diff * Weight::SIDE_STONES
}

fn aggressive(board: &Board, perspective: Player) -> f64 {
    let opponent = perspective.opponent();
    let store_diff = f64::from(board.store(perspective)) - f64::from(board.store(opponent));
    let mut score = store_diff * Weight::STORE_DIFF_AGGRESSIVE;

    let store = perspective.store_index();

    // Stones opposite the mover's empty pits are capturable next move
    let mut capture_potential = 0.0;
    // Pits whose count reaches the store exactly earn another turn
    let mut extra_turn_potential = 0.0;
    for pit in perspective.pit_range() {
        let stones = board.pits[pit];
        if stones == 0 {
            capture_potential += f64::from(board.pits[12 - pit]);
        } else if usize::from(stones) == store - pit {
            extra_turn_potential += Weight::EXTRA_TURN_UNIT;
        }
    }
    score += capture_potential * Weight::CAPTURE_POTENTIAL;
    score += extra_turn_potential * Weight::EXTRA_TURN_POTENTIAL;

    score - f64::from(board.side_stones(opponent)) * Weight::OPPONENT_STONES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_is_even() {
        let board = Board::new(4).unwrap();
        assert_eq!(evaluate(&board, Player::One), 0.0);
        assert_eq!(evaluate(&board, Player::Two), 0.0);
    }

    #[test]
    fn test_balanced_is_antisymmetric() {
        let mut board = Board::new(4).unwrap();
        board.pits[6] = 3;
        board.pits[2] = 1;
        let one = evaluate(&board, Player::One);
        let two = evaluate(&board, Player::Two);
        assert_eq!(one, -two);
        assert!(one > 0.0);
    }

    #[test]
    fn test_store_dominates_side_stones() {
        // One extra store stone (10.0) outweighs a handful of side
        // stones (0.5 each)
        let mut ahead_in_store = Board::new(4).unwrap();
        ahead_in_store.pits[6] = 1;

        let mut ahead_on_side = Board::new(4).unwrap();
        ahead_on_side.pits[0] += 6;

        assert_eq!(evaluate(&ahead_in_store, Player::One), 10.0);
        assert_eq!(evaluate(&ahead_on_side, Player::One), 3.0);
        assert!(evaluate(&ahead_in_store, Player::One) > evaluate(&ahead_on_side, Player::One));
    }

    #[test]
    fn test_terminal_sentinel() {
        let mut board = Board::new(4).unwrap();
        for pit in 0..6 {
            board.pits[pit] = 0;
        }
        board.pits[6] = 30;
        // P2 sweeps their 24 side stones but still loses 30 to 24
        assert_eq!(evaluate(&board, Player::One), Weight::WIN);
        assert_eq!(evaluate(&board, Player::Two), -Weight::WIN);
    }

    #[test]
    fn test_terminal_draw_scores_zero() {
        let mut board = Board::new(4).unwrap();
        for pit in 0..6 {
            board.pits[pit] = 0;
        }
        board.pits[6] = 24;
        assert_eq!(evaluate(&board, Player::One), 0.0);
    }

    #[test]
    fn test_aggressive_rewards_capture_setup() {
        // Empty pit 1 with stones opposite scores higher than the same
        // position with the opposite pit empty
        let mut with_target = Board::new(4).unwrap();
        with_target.pits[1] = 0;
        with_target.pits[11] = 6;

        let mut without_target = with_target.clone();
        without_target.pits[11] = 0;

        let h = Heuristic::Aggressive;
        assert!(h.evaluate(&with_target, Player::One) > h.evaluate(&without_target, Player::One));
    }

    #[test]
    fn test_aggressive_rewards_extra_turn_setup() {
        // Pit 2 holding exactly 4 stones reaches the store
        let mut board = Board::new(4).unwrap();
        board.pits[2] = 4;
        let mut no_landing = board.clone();
        no_landing.pits[2] = 3;
        no_landing.pits[3] += 1; // keep side totals equal

        let h = Heuristic::Aggressive;
        assert!(h.evaluate(&board, Player::One) > h.evaluate(&no_landing, Player::One));
    }
}
