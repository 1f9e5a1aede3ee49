//! Peg Solitaire GUI
//!
//! A graphical interface for playing peg solitaire.

use clap::Parser;
use peg_solitaire::cli::Cli;
use peg_solitaire::ui::PegSolitaireApp;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    let filter = match &cli.log_filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match cli.game_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    info!(size = config.size, "starting peg solitaire");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([600.0, 420.0])
            .with_title("Peg Solitaire"),
        ..Default::default()
    };

    eframe::run_native(
        "Peg Solitaire",
        options,
        Box::new(move |cc| Ok(Box::new(PegSolitaireApp::new(cc, config)))),
    )
}
