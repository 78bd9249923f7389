//! Theme constants for the Kalah GUI

use egui::Color32;

// Table and board - warm wood over green felt
pub const TABLE_BG: Color32 = Color32::from_rgb(34, 139, 34); // Forest green
pub const BOARD_WOOD: Color32 = Color32::from_rgb(139, 69, 19); // Saddle brown
pub const PIT_BG: Color32 = Color32::from_rgb(101, 67, 33);
pub const STORE_BG: Color32 = Color32::from_rgb(160, 82, 45); // Sienna

// Stones and markers
pub const STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const STONE_SHADOW: Color32 = Color32::from_rgb(70, 50, 30);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 215, 0); // Gold

// Player accents
pub const PLAYER1_ACCENT: Color32 = Color32::from_rgb(70, 130, 180); // Steel blue
pub const PLAYER2_ACCENT: Color32 = Color32::from_rgb(220, 20, 60); // Crimson

// Hover highlighting
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 0, 80)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 80)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const PIT_GAP: f32 = 12.0;
pub const COUNT_FONT_SIZE: f32 = 20.0;
