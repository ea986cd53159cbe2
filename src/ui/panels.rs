use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{ChartKind, DashboardState};
use crate::ui::{cards, chart};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut DashboardState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Sample set").clicked() {
                state.set_dataset(crate::data::builtin::sample_dataset());
                log::info!("Restored built-in sample set");
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} posts loaded, {} in range, {} sampled",
            state.dataset.len(),
            state.visible_indices.len(),
            state.sampled_indices.len()
        ));
        if let Some((lo, hi)) = state.dataset.score_bounds() {
            ui.label(RichText::new(format!("scores {:.0}–{:.0}%", lo * 100.0, hi * 100.0)).weak());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Query header
// ---------------------------------------------------------------------------

/// The search these posts answer, drawn like a post without a score.
pub fn query_header(ui: &mut Ui, state: &DashboardState) {
    let query = &state.query;
    if query.handle.is_empty() && query.query.is_empty() {
        return;
    }
    ui.vertical_centered(|ui: &mut Ui| {
        egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
            ui.set_max_width(500.0);
            ui.horizontal(|ui: &mut Ui| {
                cards::avatar(ui, &query.name, &query.handle);
                ui.vertical(|ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        ui.strong(&query.name);
                        ui.label(RichText::new(&query.handle).small().weak());
                    });
                    ui.label(&query.query);
                });
            });
        });
    });
}

// ---------------------------------------------------------------------------
// Chart section
// ---------------------------------------------------------------------------

/// Reset / selection caption on the left, chart switch on the right, the
/// active chart below.
pub fn chart_section(ui: &mut Ui, state: &mut DashboardState) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("⟲ Reset").clicked() {
            state.reset_selection();
        }
        if let Some(label) = state.selection_label() {
            ui.label(RichText::new(label).small().weak());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            // right_to_left lays out in reverse
            for kind in ChartKind::ALL.iter().rev() {
                if ui.selectable_label(state.chart == *kind, kind.label()).clicked() {
                    state.set_chart(*kind);
                }
            }
        });
    });

    let height = (ui.ctx().screen_rect().height() * 0.45).max(220.0);
    let clicked = {
        let posts = state.filtered_posts();
        let filter = state.selection.filter();
        ui.allocate_ui(egui::vec2(ui.available_width(), height), |ui: &mut Ui| {
            chart::adapter_for(state.chart).show(ui, &posts, filter)
        })
        .inner
    };
    if let Some(value) = clicked {
        state.select_score(value);
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut DashboardState) {
    let file = rfd::FileDialog::new()
        .set_title("Open scored posts")
        .add_filter("Supported files", &["parquet", "pq", "json", "csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} posts from {}", dataset.len(), path.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
