use eframe::egui::{self, ScrollArea, Ui};

use crate::state::DashboardState;
use crate::ui::{cards, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SentimentDashApp {
    pub state: DashboardState,
}

impl SentimentDashApp {
    pub fn new(state: DashboardState) -> Self {
        Self { state }
    }
}

impl eframe::App for SentimentDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: query, chart, cards ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::query_header(ui, &self.state);
                    ui.add_space(12.0);
                    panels::chart_section(ui, &mut self.state);
                    ui.add_space(24.0);
                    cards::card_grid(ui, &mut self.state);
                });
        });

        // ---- Full listing ----
        cards::all_posts_window(ctx, &mut self.state);
    }
}
