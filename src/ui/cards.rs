use eframe::egui::{self, Align2, Color32, FontId, RichText, ScrollArea, Sense, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::{avatar_color, sentiment_color};
use crate::data::model::{Author, ScoredPost};
use crate::state::DashboardState;

const AVATAR_SIZE: f32 = 28.0;
const CARD_WIDTH: f32 = 420.0;

// ---------------------------------------------------------------------------
// Single post card
// ---------------------------------------------------------------------------

/// Round initials badge coloured from the handle.
pub fn avatar(ui: &mut Ui, name: &str, handle: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, avatar_color(handle));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        Author::new(name, handle).initials(),
        FontId::proportional(12.0),
        Color32::WHITE,
    );
}

/// Author, text and a sentiment gauge.
pub fn post_card(ui: &mut Ui, post: &ScoredPost) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(CARD_WIDTH);
        ui.horizontal(|ui: &mut Ui| {
            let author = post.author();
            avatar(ui, &author.name, &author.handle);
            ui.vertical(|ui: &mut Ui| {
                ui.horizontal(|ui: &mut Ui| {
                    ui.strong(&author.name);
                    ui.label(RichText::new(&author.handle).small().weak());
                });
                ui.label(post.text());
                ui.add(
                    egui::ProgressBar::new(post.score() as f32)
                        .desired_width(120.0)
                        .fill(sentiment_color(post.score()))
                        .text(format!("{}%", post.percent())),
                );
            });
        });
    });
}

// ---------------------------------------------------------------------------
// Sampled card grid
// ---------------------------------------------------------------------------

/// Heading, "View all" button and the sampled posts in two columns.
pub fn card_grid(ui: &mut Ui, state: &mut DashboardState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(state.posts_heading());
        if ui.button("View All").clicked() {
            state.open_all_posts();
        }
    });
    ui.add_space(8.0);

    let sampled = state.sampled_posts();
    if sampled.is_empty() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new("No posts in the selected range.").weak());
        });
        return;
    }

    egui::Grid::new("post_cards")
        .num_columns(2)
        .spacing([12.0, 12.0])
        .show(ui, |ui: &mut Ui| {
            for (i, post) in sampled.iter().enumerate() {
                post_card(ui, post);
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

// ---------------------------------------------------------------------------
// "View all" window
// ---------------------------------------------------------------------------

/// Every post of the dataset, unfiltered and unsampled.
pub fn all_posts_window(ctx: &egui::Context, state: &mut DashboardState) {
    let mut open = state.show_all_posts;
    egui::Window::new("All Posts")
        .open(&mut open)
        .default_size([900.0, 520.0])
        .resizable(true)
        .show(ctx, |ui: &mut Ui| {
            ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
                post_table(ui, state.dataset.posts());
            });
        });
    state.show_all_posts = open;
}

fn post_table(ui: &mut Ui, posts: &[ScoredPost]) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder().at_least(240.0))
        .column(Column::exact(60.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Handle");
            });
            header.col(|ui| {
                ui.strong("Post");
            });
            header.col(|ui| {
                ui.strong("Score");
            });
        })
        .body(|body| {
            body.rows(22.0, posts.len(), |mut row| {
                let post = &posts[row.index()];
                row.col(|ui| {
                    ui.label(&post.author().name);
                });
                row.col(|ui| {
                    ui.label(RichText::new(&post.author().handle).weak());
                });
                row.col(|ui| {
                    ui.label(post.text());
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(format!("{}%", post.percent()))
                            .color(sentiment_color(post.score())),
                    );
                });
            });
        });
}
