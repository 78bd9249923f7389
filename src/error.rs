//! Error types for the Kalah engine

use crate::board::Player;

/// Errors raised by game construction and move application.
///
/// An `IllegalMove` is a contract violation: callers are expected to
/// pre-filter with `rules::legal_moves`, so there is no retry path.
/// Search timeouts are not errors; the decision agent absorbs them into
/// its random fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Selected pit is not owned by the mover, is empty, or is a store
    IllegalMove { pit: usize, player: Player },
    /// Rejected at game or agent construction time
    InvalidConfiguration(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::IllegalMove { pit, player } => {
                write!(f, "illegal move: pit {} is not playable by {}", pit, player)
            }
            GameError::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GameError::IllegalMove {
            pit: 6,
            player: Player::One,
        };
        assert!(err.to_string().contains("pit 6"));

        let err = GameError::InvalidConfiguration("max depth must be positive".into());
        assert!(err.to_string().contains("max depth"));
    }
}
