mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::SentimentDashApp;
use clap::Parser;
use eframe::egui;

use crate::config::Args;
use crate::data::{builtin, loader};
use crate::state::DashboardState;

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let mut status_message = None;
    let dataset = match &args.data {
        Some(path) => match loader::load_file(path) {
            Ok(dataset) => {
                log::info!("Loaded {} posts from {}", dataset.len(), path.display());
                dataset
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                status_message = Some(format!("Error: {e:#}"));
                builtin::sample_dataset()
            }
        },
        None => builtin::sample_dataset(),
    };

    let mut state = DashboardState::new(dataset, args.query_context(), usize::from(args.sample_count));
    state.status_message = status_message;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 900.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sentiment Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(SentimentDashApp::new(state)))),
    )
}
