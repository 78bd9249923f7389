//! Position evaluation for the Kalah AI

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, Heuristic};
pub use weights::Weight;
