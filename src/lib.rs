//! Kalah (Mancala) engine with an adversarial-search opponent
//!
//! Implements the 6-pit / 4-stone Kalah ruleset:
//! - Counter-clockwise sowing that skips the opponent's store
//! - Capture when the last stone lands in the mover's own empty pit
//! - Extra turn when the last stone lands in the mover's store
//! - Game ends when a side is exhausted; the remainder is swept home
//!
//! The computer opponent is depth-bounded minimax with alpha-beta
//! pruning and iterative deepening, run under a wall-clock budget with
//! a uniformly random legal fallback when no iteration completes.
//!
//! # Architecture
//!
//! - [`board`]: board value type and player/index model
//! - [`rules`]: sowing, capture, extra-turn and game-end rules
//! - [`eval`]: heuristic position evaluation
//! - [`search`]: alpha-beta with iterative deepening and deadlines
//! - [`agent`]: time-budgeted decision agents
//! - [`config`]: externally supplied game settings
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use mancala::{AiAgent, Board, Player};
//! use mancala::rules::{apply_move, legal_moves};
//!
//! let board = Board::new(4).unwrap();
//! let mut agent = AiAgent::new(Player::One, 4, Duration::from_secs(1)).unwrap();
//!
//! let choice = agent.choose_move(&board).unwrap();
//! assert!(legal_moves(&board).contains(&choice.pit));
//! let board = apply_move(&board, choice.pit).unwrap();
//! assert_eq!(board.total_stones(), 48);
//! ```

pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use agent::{AiAgent, MoveChoice, MoveSource, RandomAgent};
pub use board::{Board, Player};
pub use config::GameConfig;
pub use error::GameError;
pub use rules::Outcome;
