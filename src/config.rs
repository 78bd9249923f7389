//! Game and AI configuration
//!
//! Values are supplied by the embedding application; the engine only
//! validates them. Defaults follow the standard 6-pit / 4-stone game
//! with a depth-6, five-second AI and a thirty-second human clock.

use std::time::Duration;

use crate::board::DEFAULT_STONES_PER_PIT;
use crate::error::GameError;

/// Complete configuration for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Initial stones in each of the twelve pits
    pub stones_per_pit: u16,
    /// Iterative-deepening depth limit for the AI
    pub ai_max_depth: u8,
    /// Wall-clock budget per AI decision
    pub ai_timeout: Duration,
    /// Time a human player gets before a random move is played for them
    pub human_timeout: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stones_per_pit: DEFAULT_STONES_PER_PIT,
            ai_max_depth: 6,
            ai_timeout: Duration::from_secs_f64(5.0),
            human_timeout: Duration::from_secs_f64(30.0),
        }
    }
}

impl GameConfig {
    /// Reject non-positive values before a game or agent is built.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.stones_per_pit == 0 {
            return Err(GameError::InvalidConfiguration(
                "stones per pit must be positive".into(),
            ));
        }
        if self.ai_max_depth == 0 {
            return Err(GameError::InvalidConfiguration(
                "AI max depth must be positive".into(),
            ));
        }
        if self.ai_timeout.is_zero() {
            return Err(GameError::InvalidConfiguration(
                "AI timeout must be positive".into(),
            ));
        }
        if self.human_timeout.is_zero() {
            return Err(GameError::InvalidConfiguration(
                "human timeout must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.stones_per_pit, 4);
        assert_eq!(config.ai_max_depth, 6);
        assert_eq!(config.ai_timeout, Duration::from_secs(5));
        assert_eq!(config.human_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let mut config = GameConfig::default();
        config.stones_per_pit = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.ai_max_depth = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.ai_timeout = Duration::ZERO;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.human_timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }
}
