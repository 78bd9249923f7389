//! Board representation for Kalah

pub mod board;

// Re-exports
pub use board::Board;

/// Pits per side (excluding the store)
pub const PITS_PER_SIDE: usize = 6;
/// Total cells: six pits + one store per player
pub const NUM_CELLS: usize = 14;
/// Player 1's store index
pub const P1_STORE: usize = 6;
/// Player 2's store index
pub const P2_STORE: usize = 13;
/// Standard Kalah fill
pub const DEFAULT_STONES_PER_PIT: u16 = 4;

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index of this player's store
    #[inline]
    pub fn store_index(self) -> usize {
        match self {
            Player::One => P1_STORE,
            Player::Two => P2_STORE,
        }
    }

    /// Indices of this player's six pits, in sowing order
    #[inline]
    pub fn pit_range(self) -> std::ops::Range<usize> {
        match self {
            Player::One => 0..6,
            Player::Two => 7..13,
        }
    }

    /// Whether `pit` is one of this player's six pits (stores excluded)
    #[inline]
    pub fn owns_pit(self, pit: usize) -> bool {
        self.pit_range().contains(&pit)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}
