//! Peg solitaire game engine
//!
//! A single-player peg solitaire puzzle on a plus-shaped board:
//! - Default 7x7 English cross (33 holes, 32 pegs, centre empty)
//! - A peg jumps orthogonally over a neighbour into an empty hole; the
//!   jumped peg is removed
//! - Solved when a single peg is left, on the centre hole
//! - Every move is kept as a board snapshot so play can rewind to any
//!   earlier step and branch from there
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Cells, positions and the starting layout
//! - [`rules`]: Jump validation/application and the win condition
//! - [`history`]: Snapshot list with a current-step cursor
//! - [`engine`]: Selection state machine tying it all together
//! - [`config`], [`cli`], [`error`]: Start-up settings
//! - [`ui`]: egui front end (rendering and click mapping only)
//!
//! # Quick Start
//!
//! ```
//! use peg_solitaire::{GameState, Pos};
//!
//! let mut game = GameState::default();
//! game.on_cell_activated(Pos::new(3, 5));
//! game.on_cell_activated(Pos::new(3, 3));
//!
//! assert_eq!(game.pieces_left(), 31);
//! assert!(!game.is_game_over());
//!
//! // Rewind to the start; the move stays in history until a new one is played
//! game.jump_to(0);
//! assert_eq!(game.pieces_left(), 32);
//! assert_eq!(game.move_descriptions().len(), 2);
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, DEFAULT_SIZE};
pub use config::GameConfig;
pub use engine::{Activation, GameState, Selection};
pub use error::ConfigError;
pub use history::{History, MoveDescription};
pub use rules::Jump;
