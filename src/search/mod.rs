//! Search module for the Kalah AI
//!
//! Contains:
//! - Minimax with alpha-beta pruning over the rules engine
//! - Iterative deepening with a wall-clock deadline
//! - Cooperative cancellation via a shared stop flag

pub mod alphabeta;

pub use alphabeta::{SearchResult, Searcher};
