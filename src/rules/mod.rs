//! Game rules for Kalah
//!
//! This module implements the rule set for the 6-pit / 4-stone Kalah
//! variant of Mancala:
//! - Counter-clockwise sowing, skipping the opponent's store
//! - Capture when the last stone lands in the mover's own empty pit
//! - Extra turn when the last stone lands in the mover's store
//! - Game end when either side is exhausted, remainder swept to stores

pub mod end;
pub mod sowing;

// Re-exports for convenient access
pub use end::{finalize, is_terminal, winner, Outcome};
pub use sowing::{apply_move, legal_moves};
