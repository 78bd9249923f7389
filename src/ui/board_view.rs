//! Board rendering for the Kalah GUI

use crate::board::{NUM_CELLS, P1_STORE, P2_STORE, PITS_PER_SIDE};
use crate::rules::legal_moves;
use crate::{Board, Player};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the Kalah board
pub struct BoardView {
    /// Cached cell rectangles, indexed by board cell
    cell_rects: [Rect; NUM_CELLS],
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_rects: [Rect::NOTHING; NUM_CELLS],
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked pit if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<usize>,
        interactive: bool,
    ) -> Option<usize> {
        let available_size = ui.available_size();

        // Fit an 8x2 layout (store + six pits + store) into the space
        let board_width = available_size.x.min(available_size.y * 2.2) - 20.0;
        let board_height = board_width / 2.2;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_width, board_height), Sense::click());

        self.board_rect = response.rect;
        self.layout_cells();

        // Draw the wooden board on the table
        painter.rect_filled(self.board_rect, CornerRadius::same(12), BOARD_WOOD);

        let legal = legal_moves(board);

        // Draw stores first, then the pit rows
        self.draw_store(&painter, board, Player::One);
        self.draw_store(&painter, board, Player::Two);

        for pit in (0..PITS_PER_SIDE).chain(P1_STORE + 1..P2_STORE) {
            self.draw_pit(&painter, board, pit, last_move == Some(pit));
        }

        // Handle hover preview and click
        let mut clicked_pit = None;

        if interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pit) = self.screen_to_pit(pointer_pos) {
                    let is_valid = legal.contains(&pit);

                    let hover_color = if is_valid {
                        super::theme::hover_valid()
                    } else {
                        super::theme::hover_invalid()
                    };
                    let radius = self.pit_radius();
                    painter.circle_filled(self.cell_rects[pit].center(), radius, hover_color);

                    if response.clicked() && is_valid {
                        clicked_pit = Some(pit);
                    }
                }
            }
        }

        clicked_pit
    }

    /// Compute screen rectangles for every cell.
    ///
    /// Player 1's pits (0..6) run left to right along the bottom row and
    /// their store sits on the right. Player 2's pits (7..13) run right to
    /// left along the top row and their store sits on the left, so sowing
    /// reads counter-clockwise on screen.
    fn layout_cells(&mut self) {
        let inner = self.board_rect.shrink(BOARD_MARGIN);
        let columns = PITS_PER_SIDE as f32 + 2.0;
        let cell_w = (inner.width() - (columns - 1.0) * PIT_GAP) / columns;
        let cell_h = (inner.height() - PIT_GAP) / 2.0;

        let column_x = |col: f32| inner.min.x + col * (cell_w + PIT_GAP);

        for i in 0..PITS_PER_SIDE {
            let x = column_x(i as f32 + 1.0);

            // Bottom row, left to right: Player 1
            self.cell_rects[i] = Rect::from_min_size(
                Pos2::new(x, inner.min.y + cell_h + PIT_GAP),
                Vec2::new(cell_w, cell_h),
            );

            // Top row, right to left: Player 2
            let mirrored = PITS_PER_SIDE - 1 - i;
            self.cell_rects[P1_STORE + 1 + i] = Rect::from_min_size(
                Pos2::new(column_x(mirrored as f32 + 1.0), inner.min.y),
                Vec2::new(cell_w, cell_h),
            );
        }

        // Stores span both rows
        let store_h = 2.0 * cell_h + PIT_GAP;
        self.cell_rects[P2_STORE] =
            Rect::from_min_size(Pos2::new(column_x(0.0), inner.min.y), Vec2::new(cell_w, store_h));
        self.cell_rects[P1_STORE] = Rect::from_min_size(
            Pos2::new(column_x(columns - 1.0), inner.min.y),
            Vec2::new(cell_w, store_h),
        );
    }

    fn pit_radius(&self) -> f32 {
        let rect = self.cell_rects[0];
        rect.width().min(rect.height()) * 0.45
    }

    /// Draw a single pit with its stone count
    fn draw_pit(&self, painter: &Painter, board: &Board, pit: usize, is_last_move: bool) {
        let rect = self.cell_rects[pit];
        let center = rect.center();
        let radius = self.pit_radius();

        painter.circle_filled(center, radius, PIT_BG);

        if is_last_move {
            painter.circle_stroke(center, radius + 2.0, Stroke::new(3.0, LAST_MOVE_MARKER));
        }

        self.draw_stones(painter, center, radius, board.pits[pit]);

        let count_pos = Pos2::new(center.x, rect.max.y + 2.0);
        painter.text(
            count_pos,
            egui::Align2::CENTER_TOP,
            format!("{}", board.pits[pit]),
            egui::FontId::proportional(COUNT_FONT_SIZE * 0.7),
            TEXT_SECONDARY,
        );
    }

    /// Draw a player's store with its count and accent stripe
    fn draw_store(&self, painter: &Painter, board: &Board, player: Player) {
        let rect = self.cell_rects[player.store_index()];
        let accent = match player {
            Player::One => PLAYER1_ACCENT,
            Player::Two => PLAYER2_ACCENT,
        };

        painter.rect_filled(rect, CornerRadius::same(16), STORE_BG);
        painter.rect_stroke(
            rect,
            CornerRadius::same(16),
            Stroke::new(2.0, accent),
            egui::StrokeKind::Inside,
        );

        let count = board.store(player);
        self.draw_stones(painter, rect.center(), rect.width() * 0.4, count);

        painter.text(
            Pos2::new(rect.center().x, rect.max.y - 6.0),
            egui::Align2::CENTER_BOTTOM,
            format!("{}", count),
            egui::FontId::proportional(COUNT_FONT_SIZE),
            TEXT_PRIMARY,
        );
    }

    /// Scatter up to a handful of stones inside the cell; past that the
    /// count label carries the information.
    fn draw_stones(&self, painter: &Painter, center: Pos2, radius: f32, count: u16) {
        let drawn = count.min(12);
        let stone_r = (radius * 0.18).max(3.0);

        for i in 0..drawn {
            // Deterministic spiral so stones do not jitter between frames
            let angle = i as f32 * 2.399; // golden angle
            let dist = radius * 0.65 * ((i as f32 + 1.0) / 13.0).sqrt();
            let pos = center + Vec2::angled(angle) * dist;

            painter.circle_filled(
                pos + Vec2::new(1.0, 1.0),
                stone_r,
                Color32::from_rgba_unmultiplied(0, 0, 0, 50),
            );
            painter.circle_filled(pos, stone_r, STONE);
            painter.circle_stroke(pos, stone_r, Stroke::new(0.5, STONE_SHADOW));
        }
    }

    /// Convert screen coordinates to a sowable pit index
    pub fn screen_to_pit(&self, screen_pos: Pos2) -> Option<usize> {
        (0..PITS_PER_SIDE)
            .chain(P1_STORE + 1..P2_STORE)
            .find(|&pit| self.cell_rects[pit].contains(screen_pos))
    }
}
