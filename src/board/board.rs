//! Board structure with pit and store accessors

use super::{Player, NUM_CELLS, PITS_PER_SIDE};
use crate::error::GameError;

/// Kalah board state.
///
/// Cell layout (counter-clockwise sowing order):
///
/// ```text
/// Player 2 side (top):    [12][11][10][ 9][ 8][ 7]
/// Stores:           [13]                          [ 6]
/// Player 1 side (bottom): [ 0][ 1][ 2][ 3][ 4][ 5]
/// ```
///
/// A `Board` is a plain value: applying a move produces a new board and
/// the search engine only ever works on its own clones, never on the
/// caller's authoritative instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Stone count per cell, indices 0-13
    pub pits: [u16; NUM_CELLS],
    /// Player to move next
    pub turn: Player,
}

impl Board {
    /// Create a fresh board with `stones_per_pit` stones in every pit,
    /// empty stores, Player 1 to move.
    ///
    /// Returns `InvalidConfiguration` for a zero stone count.
    pub fn new(stones_per_pit: u16) -> Result<Self, GameError> {
        if stones_per_pit == 0 {
            return Err(GameError::InvalidConfiguration(
                "stones per pit must be positive".into(),
            ));
        }
        let mut pits = [stones_per_pit; NUM_CELLS];
        pits[Player::One.store_index()] = 0;
        pits[Player::Two.store_index()] = 0;
        Ok(Self {
            pits,
            turn: Player::One,
        })
    }

    /// Stones in a player's store
    #[inline]
    pub fn store(&self, player: Player) -> u16 {
        self.pits[player.store_index()]
    }

    /// Total stones across a player's six pits (store excluded)
    #[inline]
    pub fn side_stones(&self, player: Player) -> u16 {
        player.pit_range().map(|i| self.pits[i]).sum()
    }

    /// True when a player's six pits are all empty
    #[inline]
    pub fn side_empty(&self, player: Player) -> bool {
        player.pit_range().all(|i| self.pits[i] == 0)
    }

    /// Total stones on the board, stores included
    #[inline]
    pub fn total_stones(&self) -> u16 {
        self.pits.iter().sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        let mut pits = [super::DEFAULT_STONES_PER_PIT; NUM_CELLS];
        pits[Player::One.store_index()] = 0;
        pits[Player::Two.store_index()] = 0;
        Self {
            pits,
            turn: Player::One,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P2: ")?;
        for i in (7..7 + PITS_PER_SIDE).rev() {
            write!(f, "{:2} ", self.pits[i])?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "[{:2}]{}[{:2}]",
            self.store(Player::Two),
            " ".repeat(14),
            self.store(Player::One)
        )?;
        write!(f, "P1: ")?;
        for i in 0..PITS_PER_SIDE {
            write!(f, "{:2} ", self.pits[i])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_layout() {
        let board = Board::new(4).unwrap();
        for pit in 0..6 {
            assert_eq!(board.pits[pit], 4);
        }
        for pit in 7..13 {
            assert_eq!(board.pits[pit], 4);
        }
        assert_eq!(board.store(Player::One), 0);
        assert_eq!(board.store(Player::Two), 0);
        assert_eq!(board.turn, Player::One);
    }

    #[test]
    fn test_new_board_rejects_zero_stones() {
        assert!(matches!(
            Board::new(0),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_total_stones() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.total_stones(), 48);
        let board = Board::new(6).unwrap();
        assert_eq!(board.total_stones(), 72);
    }

    #[test]
    fn test_side_accessors() {
        let mut board = Board::new(4).unwrap();
        assert_eq!(board.side_stones(Player::One), 24);
        assert_eq!(board.side_stones(Player::Two), 24);
        assert!(!board.side_empty(Player::One));

        for pit in 0..6 {
            board.pits[pit] = 0;
        }
        assert!(board.side_empty(Player::One));
        assert!(!board.side_empty(Player::Two));
    }

    #[test]
    fn test_default_is_standard_game() {
        let board = Board::default();
        assert_eq!(board.total_stones(), 48);
        assert_eq!(board.turn, Player::One);
    }
}
