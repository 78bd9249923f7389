//! Decision agents for computer-controlled players
//!
//! [`AiAgent`] runs the searcher on a worker thread under a wall-clock
//! budget and falls back to a uniformly random legal move when nothing
//! completed in time. Randomness enters the AI path only here, and the
//! RNG can be seeded so tests can pin the fallback.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Player};
use crate::error::GameError;
use crate::eval::Heuristic;
use crate::rules::legal_moves;
use crate::search::Searcher;

/// Margin past the search deadline before the caller gives up waiting.
/// Covers worker startup and the bounded node-interval deadline polls.
const GRACE: Duration = Duration::from_millis(50);

/// How a move was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Deepest completed iterative-deepening result
    Search,
    /// Deadline hit before any depth completed; uniform random legal move
    Fallback,
    /// Single legal move, no search needed
    Forced,
}

/// A chosen move with search diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveChoice {
    /// Pit index to play
    pub pit: usize,
    /// Score from the agent's perspective (0 for fallback/forced moves)
    pub score: f64,
    /// Deepest fully completed search depth
    pub depth: u8,
    /// Nodes visited
    pub nodes: u64,
    /// How the move was decided
    pub source: MoveSource,
    /// Wall-clock decision time in milliseconds
    pub time_ms: u64,
}

/// Minimax-driven computer player with a time budget.
pub struct AiAgent {
    perspective: Player,
    max_depth: u8,
    timeout: Duration,
    heuristic: Heuristic,
    rng: StdRng,
}

impl AiAgent {
    /// Create an agent for `perspective`. Depth and timeout must be
    /// positive; both are rejected at construction.
    pub fn new(
        perspective: Player,
        max_depth: u8,
        timeout: Duration,
    ) -> Result<Self, GameError> {
        if max_depth == 0 {
            return Err(GameError::InvalidConfiguration(
                "search depth must be positive".into(),
            ));
        }
        if timeout.is_zero() {
            return Err(GameError::InvalidConfiguration(
                "AI timeout must be positive".into(),
            ));
        }
        Ok(Self {
            perspective,
            max_depth,
            timeout,
            heuristic: Heuristic::default(),
            rng: StdRng::from_entropy(),
        })
    }

    /// Select the evaluation strategy (default: balanced).
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Seed the fallback RNG for deterministic tests.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn perspective(&self) -> Player {
        self.perspective
    }

    /// Choose a move for the current position, blocking for at most the
    /// configured timeout plus a small grace margin.
    ///
    /// Returns `None` only when the agent has no legal move (a terminal
    /// position). Timeouts are routine, not errors: the deepest
    /// completed search result is used when one exists, and a uniformly
    /// random legal move otherwise.
    pub fn choose_move(&mut self, board: &Board) -> Option<MoveChoice> {
        debug_assert_eq!(board.turn, self.perspective);
        let start = Instant::now();

        let legal = legal_moves(board);
        if legal.is_empty() {
            return None;
        }
        if legal.len() == 1 {
            return Some(MoveChoice {
                pit: legal[0],
                score: 0.0,
                depth: 0,
                nodes: 0,
                source: MoveSource::Forced,
                time_ms: elapsed_ms(start),
            });
        }

        let stop = Arc::new(AtomicBool::new(false));
        let deadline = start + self.timeout;
        let (tx, rx) = mpsc::channel();
        {
            let stop = Arc::clone(&stop);
            let board = board.clone();
            let perspective = self.perspective;
            let max_depth = self.max_depth;
            let heuristic = self.heuristic;
            thread::spawn(move || {
                let mut searcher = Searcher::with_stop(heuristic, stop);
                let result = searcher.search(&board, perspective, max_depth, Some(deadline));
                // Receiver may already have given up; that is fine
                let _ = tx.send(result);
            });
        }

        match rx.recv_timeout(self.timeout + GRACE) {
            Ok(Some(result)) => Some(MoveChoice {
                pit: result.best_move,
                score: result.score,
                depth: result.depth,
                nodes: result.nodes,
                source: MoveSource::Search,
                time_ms: elapsed_ms(start),
            }),
            // Search exhausted before depth 1 completed, or the worker
            // outlived the grace margin: discard it and pick randomly
            Ok(None) | Err(_) => {
                stop.store(true, Ordering::Relaxed);
                Some(MoveChoice {
                    pit: random_move(&legal, &mut self.rng),
                    score: 0.0,
                    depth: 0,
                    nodes: 0,
                    source: MoveSource::Fallback,
                    time_ms: elapsed_ms(start),
                })
            }
        }
    }
}

/// Computer player that plays uniformly random legal moves. Useful as a
/// baseline opponent and in tests.
pub struct RandomAgent {
    perspective: Player,
    rng: StdRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(perspective: Player) -> Self {
        Self {
            perspective,
            rng: StdRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn with_seed(perspective: Player, seed: u64) -> Self {
        Self {
            perspective,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Random legal move, `None` when the side is exhausted.
    pub fn choose_move(&mut self, board: &Board) -> Option<usize> {
        debug_assert_eq!(board.turn, self.perspective);
        let legal = legal_moves(board);
        if legal.is_empty() {
            None
        } else {
            Some(random_move(&legal, &mut self.rng))
        }
    }
}

/// Uniform choice among pre-validated legal pits.
fn random_move(legal: &[usize], rng: &mut StdRng) -> usize {
    legal[rng.gen_range(0..legal.len())]
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_rejects_bad_config() {
        assert!(AiAgent::new(Player::One, 0, Duration::from_secs(5)).is_err());
        assert!(AiAgent::new(Player::One, 6, Duration::ZERO).is_err());
        assert!(AiAgent::new(Player::One, 6, Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn test_choose_move_is_legal() {
        let board = Board::new(4).unwrap();
        let mut agent = AiAgent::new(Player::One, 4, Duration::from_secs(5)).unwrap();
        let choice = agent.choose_move(&board).unwrap();
        assert!(legal_moves(&board).contains(&choice.pit));
        assert_eq!(choice.source, MoveSource::Search);
        assert!(choice.depth >= 1);
    }

    #[test]
    fn test_single_legal_move_short_circuits() {
        let mut board = Board::new(4).unwrap();
        for pit in 0..6 {
            board.pits[pit] = 0;
        }
        board.pits[3] = 2;
        let mut agent = AiAgent::new(Player::One, 6, Duration::from_secs(5)).unwrap();
        let choice = agent.choose_move(&board).unwrap();
        assert_eq!(choice.pit, 3);
        assert_eq!(choice.source, MoveSource::Forced);
    }

    #[test]
    fn test_no_moves_returns_none() {
        let mut board = Board::new(4).unwrap();
        for pit in 0..6 {
            board.pits[pit] = 0;
        }
        let mut agent = AiAgent::new(Player::One, 4, Duration::from_secs(1)).unwrap();
        assert!(agent.choose_move(&board).is_none());
    }

    #[test]
    fn test_timeout_falls_back_to_legal_random() {
        // A 1ns budget expires before depth 1 completes; the fallback
        // must still be a legal pit, drawn from the seeded RNG.
        let board = Board::new(4).unwrap();
        let legal = legal_moves(&board);
        for seed in 0..20 {
            let mut agent = AiAgent::new(Player::One, 10, Duration::from_nanos(1))
                .unwrap()
                .with_seed(seed);
            let choice = agent.choose_move(&board).unwrap();
            assert!(legal.contains(&choice.pit), "seed {}", seed);
            assert_eq!(choice.source, MoveSource::Fallback);
        }
    }

    #[test]
    fn test_seeded_fallback_deterministic() {
        let board = Board::new(4).unwrap();
        let pick = |seed| {
            let mut agent = AiAgent::new(Player::One, 10, Duration::from_nanos(1))
                .unwrap()
                .with_seed(seed);
            agent.choose_move(&board).unwrap().pit
        };
        assert_eq!(pick(7), pick(7));
    }

    #[test]
    fn test_random_agent_legal_and_seeded() {
        let board = Board::new(4).unwrap();
        let mut a = RandomAgent::with_seed(Player::One, 42);
        let mut b = RandomAgent::with_seed(Player::One, 42);
        let pit_a = a.choose_move(&board).unwrap();
        let pit_b = b.choose_move(&board).unwrap();
        assert_eq!(pit_a, pit_b);
        assert!(legal_moves(&board).contains(&pit_a));
    }
}
