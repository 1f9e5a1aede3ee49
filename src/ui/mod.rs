//! GUI module for the peg solitaire game
//!
//! This module provides a native Rust GUI using egui/eframe. It only draws
//! the engine's state and forwards clicks; all rules live in the engine.

mod app;
mod board_view;
mod theme;

pub use app::PegSolitaireApp;
pub use board_view::BoardView;
