//! Theme constants for the peg solitaire GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const HOLE: Color32 = Color32::from_rgb(139, 90, 43);
pub const HOLE_RIM: Color32 = Color32::from_rgb(110, 70, 35);

// Pegs
pub const PEG: Color32 = Color32::from_rgb(180, 40, 50);
pub const PEG_HIGHLIGHT: Color32 = Color32::from_rgb(235, 120, 120);
pub const PEG_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 60);

// Markers
pub const SELECTION_RING: Color32 = Color32::from_rgb(255, 215, 0);
pub const TARGET_MARKER: Color32 = Color32::from_rgb(50, 220, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const STUCK_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MARGIN: f32 = 20.0;
pub const PEG_RADIUS_RATIO: f32 = 0.36;
pub const HOLE_RADIUS_RATIO: f32 = 0.18;
pub const SELECTION_RING_WIDTH: f32 = 3.0;
pub const TARGET_MARKER_RATIO: f32 = 0.24;
