//! Game state management for the Kalah GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::rules::{apply_move, finalize, is_terminal, legal_moves, winner, Outcome};
use crate::{AiAgent, Board, GameConfig, MoveChoice, Player};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans sharing the mouse
    HumanVsHuman,
    /// One human seat, AI in the other
    HumanVsAi { human: Player },
    /// AI in both seats
    AiVsAi,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsAi {
            human: Player::One,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Option<MoveChoice>>,
        start_time: Instant,
    },
}

/// Main game state: owns the authoritative board.
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub config: GameConfig,
    pub game_over: Option<Outcome>,
    pub last_move: Option<usize>,
    pub move_history: Vec<(usize, Player)>,
    pub last_ai_choice: Option<MoveChoice>,
    pub ai_state: AiState,
    /// When the current turn started; drives the human timeout
    pub turn_started: Instant,
    pub message: Option<String>,
    rng: StdRng,
}

impl GameState {
    /// Start a game in `mode`. The config is assumed validated.
    pub fn new(mode: GameMode, config: GameConfig) -> Self {
        // Validated config: stones_per_pit is positive
        let board = Board::new(config.stones_per_pit).unwrap_or_default();
        Self {
            board,
            mode,
            config,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_choice: None,
            ai_state: AiState::Idle,
            turn_started: Instant::now(),
            message: None,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.config);
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::HumanVsHuman => true,
            GameMode::HumanVsAi { human } => self.board.turn == human,
            GameMode::AiVsAi => false,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt a human move on the given pit.
    pub fn try_select_pit(&mut self, pit: usize) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() || !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        if !legal_moves(&self.board).contains(&pit) {
            return Err("Invalid move (empty pit or not yours)".to_string());
        }
        self.execute_move(pit);
        Ok(())
    }

    /// Apply a pre-validated move for whoever's turn it is.
    fn execute_move(&mut self, pit: usize) {
        let mover = self.board.turn;
        // Pit came from legal_moves, so apply cannot fail
        let next = match apply_move(&self.board, pit) {
            Ok(next) => next,
            Err(err) => {
                self.message = Some(err.to_string());
                return;
            }
        };

        let extra_turn = next.turn == mover;
        self.board = next;
        self.move_history.push((pit, mover));
        self.last_move = Some(pit);
        self.message = None;

        if is_terminal(&self.board) {
            self.board = finalize(&self.board);
            self.game_over = winner(&self.board);
            return;
        }

        if extra_turn {
            self.message = Some(format!("{} gets another turn!", mover));
        }
        self.turn_started = Instant::now();
    }

    /// Spawn the AI decision for the current turn.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let perspective = self.board.turn;
        let depth = self.config.ai_max_depth;
        let timeout = self.config.ai_timeout;

        let (tx, rx) = channel();
        thread::spawn(move || {
            // Config was validated before the game started
            let choice = AiAgent::new(perspective, depth, timeout)
                .ok()
                .and_then(|mut agent| agent.choose_move(&board));
            let _ = tx.send(choice);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Poll for a finished AI decision and apply it.
    pub fn check_ai_result(&mut self) {
        let poll = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(choice) => Some(choice),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => None,
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        match poll {
            Some(Some(choice)) => {
                self.last_ai_choice = Some(choice);
                self.execute_move(choice.pit);
            }
            // No legal move only happens in a terminal position
            Some(None) => self.message = Some("AI has no legal move".to_string()),
            None => self.message = Some("AI worker failed".to_string()),
        }
    }

    /// Play a random move for a human who ran out the clock.
    pub fn check_human_timeout(&mut self) {
        if !self.is_human_turn() || self.game_over.is_some() {
            return;
        }
        if self.turn_started.elapsed() < self.config.human_timeout {
            return;
        }
        let legal = legal_moves(&self.board);
        if legal.is_empty() {
            return;
        }
        let pit = legal[self.rng.gen_range(0..legal.len())];
        self.execute_move(pit);
        self.message = Some("Timeout! Random move selected.".to_string());
    }

    /// Time left on the human clock
    pub fn human_time_left(&self) -> Duration {
        self.config
            .human_timeout
            .saturating_sub(self.turn_started.elapsed())
    }

    /// How long the AI has been thinking
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config() -> GameConfig {
        GameConfig {
            ai_timeout: Duration::from_millis(200),
            ai_max_depth: 3,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_turn_ownership_by_mode() {
        let state = GameState::new(GameMode::HumanVsHuman, quick_config());
        assert!(state.is_human_turn());

        let state = GameState::new(
            GameMode::HumanVsAi {
                human: Player::Two,
            },
            quick_config(),
        );
        assert!(state.is_ai_turn());

        let state = GameState::new(GameMode::AiVsAi, quick_config());
        assert!(state.is_ai_turn());
    }

    #[test]
    fn test_human_move_validation() {
        let mut state = GameState::new(GameMode::HumanVsHuman, quick_config());
        assert!(state.try_select_pit(9).is_err(), "opponent pit");
        assert!(state.try_select_pit(6).is_err(), "store");
        assert!(state.try_select_pit(2).is_ok());
        assert_eq!(state.last_move, Some(2));
    }

    #[test]
    fn test_extra_turn_message() {
        let mut state = GameState::new(GameMode::HumanVsHuman, quick_config());
        state.try_select_pit(2).unwrap(); // lands in the store
        assert_eq!(state.board.turn, Player::One);
        assert!(state.message.as_deref().unwrap_or("").contains("another turn"));
    }

    #[test]
    fn test_game_over_finalizes_board() {
        let mut state = GameState::new(GameMode::HumanVsHuman, quick_config());
        // Leave Player 1 a single stone in pit 5; playing it empties
        // the side and ends the game.
        for pit in 0..6 {
            state.board.pits[pit] = 0;
        }
        state.board.pits[5] = 1;
        state.try_select_pit(5).unwrap();

        assert!(state.game_over.is_some());
        assert!(state.board.side_empty(Player::One));
        assert!(state.board.side_empty(Player::Two));
        assert_eq!(state.game_over, Some(Outcome::Win(Player::Two)));
    }
}
