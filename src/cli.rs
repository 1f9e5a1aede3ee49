//! Command-line interface for the peg solitaire GUI.

use clap::Parser;

use crate::board::DEFAULT_SIZE;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Peg Solitaire - jump pegs until one is left in the centre
#[derive(Parser, Debug)]
#[command(name = "peg_solitaire")]
#[command(about = "Single-player peg solitaire", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size (odd, 5 to 25)
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Log filter directive, overrides RUST_LOG (e.g. "peg_solitaire=debug")
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Cli {
    /// Validated game settings from the parsed arguments
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::with_size(self.size)
    }
}
