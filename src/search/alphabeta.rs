//! Minimax search with alpha-beta pruning and iterative deepening
//!
//! The search recurses over `rules::legal_moves` / `rules::apply_move`
//! on private board clones; the caller's board is never mutated. A node
//! maximizes when its side to move equals the search perspective and
//! minimizes otherwise, so extra-turn chains fall out of `Board::turn`
//! with no special bookkeeping.
//!
//! Iterative deepening runs depths 1, 2, 3, ... up to the limit. The
//! deadline is checked before each depth and every 1024 nodes within
//! one; an interrupted depth is discarded entirely and the last fully
//! completed depth's result stands. Ties between moves break toward the
//! lowest pit index, so identical inputs always produce identical
//! output.
//!
//! # Example
//!
//! ```
//! use mancala::board::{Board, Player};
//! use mancala::search::Searcher;
//!
//! let board = Board::new(4).unwrap();
//! let mut searcher = Searcher::new(Default::default());
//! let result = searcher.search(&board, Player::One, 4, None).unwrap();
//! assert!(board.turn.owns_pit(result.best_move));
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::board::{Board, Player};
use crate::eval::Heuristic;
use crate::rules::{apply_move, is_terminal, legal_moves};

/// Infinity bounds for alpha-beta
const INF: f64 = f64::INFINITY;

/// Nodes between deadline polls
const TIME_CHECK_INTERVAL: u64 = 1024;

/// Result of a completed search iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Best move at the deepest fully completed depth
    pub best_move: usize,
    /// Evaluation of that move from the perspective player's view
    pub score: f64,
    /// Deepest fully completed depth
    pub depth: u8,
    /// Total nodes visited, abandoned iterations included
    pub nodes: u64,
}

/// Depth-bounded, deadline-bounded minimax searcher.
pub struct Searcher {
    heuristic: Heuristic,
    /// Set by the owner of [`Searcher::stop_handle`] or by deadline expiry
    stop: Arc<AtomicBool>,
    deadline: Option<Instant>,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new(heuristic: Heuristic) -> Self {
        Self::with_stop(heuristic, Arc::new(AtomicBool::new(false)))
    }

    /// Create a searcher sharing an externally owned stop flag, so the
    /// caller can cancel a search running on another thread.
    #[must_use]
    pub fn with_stop(heuristic: Heuristic, stop: Arc<AtomicBool>) -> Self {
        Self {
            heuristic,
            stop,
            deadline: None,
            nodes: 0,
        }
    }

    /// Handle for cancelling this searcher from another thread.
    #[must_use]
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Check the stop flag only (cheap, done at every node).
    #[inline]
    fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Check the deadline and latch the stop flag once it has passed.
    #[inline]
    fn check_time(&self) -> bool {
        if self.stop.load(Ordering::Relaxed) {
            return true;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.stop.store(true, Ordering::Relaxed);
                return true;
            }
        }
        false
    }

    /// Iterative-deepening search for the best move from `board`.
    ///
    /// `perspective` must be the player to move at the root. Returns
    /// `None` when no depth completed before the deadline (or before
    /// cancellation, or when the mover has no legal move); the caller
    /// decides what to do with an exhausted search.
    pub fn search(
        &mut self,
        board: &Board,
        perspective: Player,
        max_depth: u8,
        deadline: Option<Instant>,
    ) -> Option<SearchResult> {
        debug_assert_eq!(board.turn, perspective, "search starts on the mover's turn");
        self.deadline = deadline;
        self.nodes = 0;

        let mut best: Option<SearchResult> = None;

        for depth in 1..=max_depth {
            if self.check_time() {
                break;
            }
            match self.search_root(board, perspective, depth) {
                Some((best_move, score)) => {
                    best = Some(SearchResult {
                        best_move,
                        score,
                        depth,
                        nodes: self.nodes,
                    });
                }
                // Interrupted mid-iteration: the partial answer may not
                // reflect exhaustive exploration at this depth, so only
                // the previous completed depth is kept.
                None => break,
            }
        }

        if let Some(result) = best.as_mut() {
            result.nodes = self.nodes;
        }
        best
    }

    /// Full-window alpha-beta over the root moves. Returns `None` when
    /// the deadline or stop flag interrupted the iteration.
    fn search_root(
        &mut self,
        board: &Board,
        perspective: Player,
        depth: u8,
    ) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        let mut alpha = -INF;

        for pit in legal_moves(board) {
            // Legal moves never fail to apply
            let child = apply_move(board, pit).ok()?;
            let score = self.alpha_beta(&child, perspective, depth - 1, alpha, INF);
            if self.is_stopped() {
                return None;
            }
            // Strict improvement only: ties keep the lowest pit index
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pit, score));
            }
            alpha = alpha.max(score);
        }

        if self.is_stopped() {
            None
        } else {
            best
        }
    }

    /// Recursive alpha-beta. The node maximizes when its side to move is
    /// `perspective`, minimizes otherwise.
    fn alpha_beta(
        &mut self,
        board: &Board,
        perspective: Player,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes += 1;
        if self.nodes % TIME_CHECK_INTERVAL == 0 && self.check_time() {
            return 0.0;
        }
        if self.is_stopped() {
            return 0.0;
        }

        if depth == 0 || is_terminal(board) {
            return self.heuristic.evaluate(board, perspective);
        }

        let maximizing = board.turn == perspective;
        let mut best = if maximizing { -INF } else { INF };

        for pit in legal_moves(board) {
            let child = match apply_move(board, pit) {
                Ok(child) => child,
                Err(_) => continue,
            };
            let score = self.alpha_beta(&child, perspective, depth - 1, alpha, beta);
            if self.is_stopped() {
                return 0.0;
            }

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}
