//! Main application for the Kalah GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::rules::Outcome;
use crate::{GameConfig, Player};

/// Main Mancala application
pub struct MancalaApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for MancalaApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default(), GameConfig::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl MancalaApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs AI - Player 1)").clicked() {
                        self.state = GameState::new(
                            GameMode::HumanVsAi {
                                human: Player::One,
                            },
                            self.state.config,
                        );
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs AI - Player 2)").clicked() {
                        self.state = GameState::new(
                            GameMode::HumanVsAi {
                                human: Player::Two,
                            },
                            self.state.config,
                        );
                        ui.close_menu();
                    }
                    if ui.button("New Game (Hotseat)").clicked() {
                        self.state =
                            GameState::new(GameMode::HumanVsHuman, self.state.config);
                        ui.close_menu();
                    }
                    if ui.button("New Game (AI vs AI)").clicked() {
                        self.state = GameState::new(GameMode::AiVsAi, self.state.config);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::HumanVsAi { human } => format!("vs AI - You: {}", human),
                        GameMode::HumanVsHuman => "Hotseat".to_string(),
                        GameMode::AiVsAi => "AI vs AI".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("MANCALA").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Kalah rules").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.board.turn;
            let accent = match turn {
                Player::One => PLAYER1_ACCENT,
                Player::Two => PLAYER2_ACCENT,
            };

            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, accent);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{}", turn))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("Waiting", TEXT_MUTED)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let budget = self.state.config.ai_timeout.as_secs_f32();
                let color = if secs < budget * 0.5 {
                    TIMER_NORMAL
                } else if secs < budget * 0.9 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(
                    RichText::new(format!("{:.2}s", secs))
                        .size(28.0)
                        .strong()
                        .color(color),
                );
            } else if self.state.is_human_turn() && self.state.game_over.is_none() {
                let left = self.state.human_time_left().as_secs_f32();
                let color = if left > 10.0 {
                    TIMER_NORMAL
                } else if left > 5.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.0}s", left)).size(28.0).strong().color(color));
                ui.label(RichText::new("until random move").size(10.0).color(TEXT_MUTED));
            } else {
                ui.label(RichText::new("--").size(24.0).color(TEXT_MUTED));
            }

            if let Some(choice) = &self.state.last_ai_choice {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {}ms", choice.time_ms))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render stores score card
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STORES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            self.render_score_row(ui, Player::One);
            ui.add_space(6.0);
            self.render_score_row(ui, Player::Two);
        });
    }

    fn render_score_row(&self, ui: &mut egui::Ui, player: Player) {
        let accent = match player {
            Player::One => PLAYER1_ACCENT,
            Player::Two => PLAYER2_ACCENT,
        };
        let store = self.state.board.store(player);
        let side = self.state.board.side_stones(player);

        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{}", player)).size(13.0).color(accent));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{}", store))
                        .size(16.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
                ui.label(
                    RichText::new(format!("({} in pits)", side))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(egui::Color32::from_rgb(50, 53, 58))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            btn_frame.show(ui, |ui| {
                if ui
                    .add(
                        egui::Label::new(
                            RichText::new("New Game").size(12.0).color(TEXT_PRIMARY),
                        )
                        .sense(egui::Sense::click()),
                    )
                    .clicked()
                {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(choice) = &self.state.last_ai_choice {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{:?}", choice.source))
                                    .size(11.0)
                                    .strong()
                                    .color(TIMER_NORMAL),
                            );
                            ui.label(
                                RichText::new(format!("Score: {:.1}", choice.score))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                            ui.label(
                                RichText::new(format!("Depth: {}", choice.depth))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("{}ms", choice.time_ms))
                                        .size(10.0)
                                        .color(TEXT_SECONDARY),
                                );
                                ui.label(
                                    RichText::new(format!("{} nodes", choice.nodes))
                                        .size(10.0)
                                        .color(TEXT_MUTED),
                                );
                            });
                        });
                    });

                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("-> pit {}", choice.pit))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                } else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let headline = match outcome {
            Outcome::Win(player) => format!("{} WINS!", player),
            Outcome::Draw => "DRAW".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));

                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!(
                            "{} - {}",
                            self.state.board.store(Player::One),
                            self.state.board.store(Player::Two)
                        ))
                        .size(14.0)
                        .color(TEXT_SECONDARY),
                    );

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if ui
                                .add(
                                    egui::Label::new(
                                        RichText::new("New Game")
                                            .size(14.0)
                                            .strong()
                                            .color(TEXT_PRIMARY),
                                    )
                                    .sense(egui::Sense::click()),
                                )
                                .clicked()
                            {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(TABLE_BG))
            .show(ctx, |ui| {
                let interactive = self.state.is_human_turn()
                    && !self.state.is_ai_thinking()
                    && self.state.game_over.is_none();

                ui.centered_and_justified(|ui| {
                    let clicked = self.board_view.show(
                        ui,
                        &self.state.board,
                        self.state.last_move,
                        interactive,
                    );

                    if let Some(pit) = clicked {
                        if let Err(msg) = self.state.try_select_pit(pit) {
                            self.state.message = Some(msg);
                        }
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });

        // 1-6 select the human's pits, numbered left to right
        let pressed_pit = ctx.input(|i| {
            [
                egui::Key::Num1,
                egui::Key::Num2,
                egui::Key::Num3,
                egui::Key::Num4,
                egui::Key::Num5,
                egui::Key::Num6,
            ]
            .iter()
            .position(|&key| i.key_pressed(key))
        });

        if let Some(offset) = pressed_pit {
            if self.state.is_human_turn() {
                let pit = self.state.board.turn.pit_range().start + offset;
                if let Err(msg) = self.state.try_select_pit(pit) {
                    self.state.message = Some(msg);
                }
            }
        }
    }
}

impl eframe::App for MancalaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Pick up a finished AI search
        self.state.check_ai_result();

        // Force a random move if the human ran out the clock
        self.state.check_human_timeout();

        // Kick off the AI for its turn
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none()
        {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Repaint while the AI thinks or a human clock is ticking
        if self.state.is_ai_thinking()
            || (self.state.is_human_turn() && self.state.game_over.is_none())
        {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
