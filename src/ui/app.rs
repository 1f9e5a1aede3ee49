//! Main application for the peg solitaire GUI

use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel};
use tracing::info;

use super::board_view::BoardView;
use super::theme::*;
use crate::{GameConfig, GameState, Pos};

/// Main peg solitaire application
pub struct PegSolitaireApp {
    config: GameConfig,
    state: GameState,
    board_view: BoardView,
}

impl PegSolitaireApp {
    /// Create the app for a validated configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            config,
            state: GameState::from_config(&config),
            board_view: BoardView::default(),
        }
    }

    fn new_game(&mut self) {
        info!(size = self.config.size, "new game");
        self.state = GameState::from_config(&self.config);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.config.size;
                    ui.label(format!("{size}x{size} board"));
                });
            });
        });
    }

    /// Render the side panel with game info and the move list
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);

                if self.state.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                } else if self.state.is_stuck() {
                    ui.add_space(10.0);
                    self.render_stuck_card(ui);
                }

                ui.add_space(10.0);
                self.render_moves_card(ui);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("PEG SOLITAIRE").size(20.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("{} pegs left", self.state.pieces_left()))
                    .size(22.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
            let history = self.state.history();
            ui.label(
                RichText::new(format!("Step {} of {}", history.current_step(), history.last_step()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("You win!").size(22.0).strong().color(WIN_HIGHLIGHT));
                    ui.add_space(8.0);
                    if ui.button("New Game").clicked() {
                        self.new_game();
                    }
                });
            });
    }

    fn render_stuck_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new("No moves left").size(13.0).strong().color(STUCK_WARNING));
                ui.label(
                    RichText::new("Go back to an earlier move and try another line.")
                        .size(11.0)
                        .color(TEXT_PRIMARY),
                );
            });
    }

    /// Move list: one button per history snapshot
    fn render_moves_card(&mut self, ui: &mut egui::Ui) {
        let current = self.state.current_step();
        let mut jump = None;

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
                for description in self.state.move_descriptions() {
                    let text = RichText::new(&description.label).size(12.0);
                    let text = if description.step == current {
                        text.strong().color(TEXT_PRIMARY)
                    } else {
                        text.color(TEXT_SECONDARY)
                    };
                    if ui.button(text).clicked() {
                        jump = Some(description.step);
                    }
                }
            });
        });

        if let Some(step) = jump {
            self.state.jump_to(step);
        }
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let targets: Vec<Pos> = self.state.selected_targets().iter().map(|j| j.to).collect();

                let clicked = self.board_view.show(
                    ui,
                    self.state.current_board(),
                    self.state.selection(),
                    &targets,
                    !self.state.is_game_over(),
                );

                if let Some(pos) = clicked {
                    if self.state.on_cell_activated(pos).changed() {
                        ui.ctx().request_repaint();
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, back, forward) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });

        if new_game {
            self.new_game();
        }

        // Step through history one snapshot at a time
        let step = self.state.current_step();
        if back && step > 0 {
            self.state.jump_to(step - 1);
        } else if forward && step < self.state.history().last_step() {
            self.state.jump_to(step + 1);
        }
    }
}

impl eframe::App for PegSolitaireApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
