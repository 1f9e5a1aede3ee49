//! Board rendering for the peg solitaire GUI

use crate::{Board, Cell, Pos, Selection};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and click mapping for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Grid dimension of the last drawn board
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            size: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        selection: Selection,
        targets: &[Pos],
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        self.size = board.size();

        // Fit the square board into the available space
        let board_px = (available_size.x.min(available_size.y) - 20.0).max(100.0);
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / self.size.max(1) as f32;

        let sense = if interactive { Sense::click() } else { Sense::hover() };
        let (response, painter) = ui.allocate_painter(Vec2::new(board_px, board_px), sense);
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        self.draw_cells(&painter, board);

        for &pos in targets {
            self.draw_target(&painter, pos);
        }

        if let Selection::Selected(pos) = selection {
            self.draw_selection(&painter, pos);
        }

        if !interactive || !response.clicked() {
            return None;
        }
        response
            .interact_pointer_pos()
            .and_then(|pointer| self.playable_cell_at(board, pointer))
    }

    /// Board cell under the pointer, skipping walls and the margin
    pub fn playable_cell_at(&self, board: &Board, screen_pos: Pos2) -> Option<Pos> {
        self.screen_to_board(screen_pos)
            .filter(|&pos| board.is_playable(pos))
    }

    /// Draw holes and pegs; walls are left as plain background
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        for pos in board.positions() {
            match board.get(pos) {
                Cell::Wall => {}
                Cell::Empty => self.draw_hole(painter, pos),
                Cell::Piece => {
                    self.draw_hole(painter, pos);
                    self.draw_peg(painter, pos);
                }
            }
        }
    }

    fn draw_hole(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * HOLE_RADIUS_RATIO;
        painter.circle_filled(center, radius, HOLE);
        painter.circle_stroke(center, radius, Stroke::new(1.5, HOLE_RIM));
    }

    /// Draw a single peg with shadow and highlight
    fn draw_peg(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PEG_RADIUS_RATIO;

        painter.circle_filled(center + Vec2::new(2.0, 2.0), radius, PEG_SHADOW);
        painter.circle_filled(center, radius, PEG);

        let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
        painter.circle_filled(center + highlight_offset, radius * 0.25, PEG_HIGHLIGHT);
    }

    fn draw_selection(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PEG_RADIUS_RATIO + 3.0;
        painter.circle_stroke(center, radius, Stroke::new(SELECTION_RING_WIDTH, SELECTION_RING));
    }

    /// Mark a hole the selected peg can jump into
    fn draw_target(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * TARGET_MARKER_RATIO;
        painter.circle_stroke(center, radius, Stroke::new(2.5, TARGET_MARKER));
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        let size = self.size as i32;
        if col >= 0 && col < size && row >= 0 && row < size {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the centre of its cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
