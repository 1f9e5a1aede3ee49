//! Game rules for peg solitaire
//!
//! This module implements the rule set:
//! - Jump validation and application
//! - Win condition (last peg on the centre hole)

pub mod jump;
pub mod win;

// Re-exports for convenient access
pub use jump::{apply, has_any_jump, targets_from, validate, Jump};
pub use win::is_game_over;
