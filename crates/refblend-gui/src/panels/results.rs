use refblend_core::status::{GenerationStatus, LOADING_TITLE, RETRY_TIPS};

use crate::app::RefblendApp;
use crate::panels::helpers::{draw_texture_fitted, save_all_results, save_result};

const CELL_WIDTH: f32 = 280.0;

pub fn show(ctx: &egui::Context, app: &mut RefblendApp) {
    egui::CentralPanel::default().show(ctx, |ui| match app.ui_state.status {
        GenerationStatus::Idle => show_placeholder(ui),
        GenerationStatus::Loading => show_loading(ui, app),
        GenerationStatus::Failed(ref message) => {
            let message = message.clone();
            show_failure(ui, app, &message);
        }
        GenerationStatus::Ready(_) => show_grid(ui, app),
    });
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Add reference images and a prompt, then press Generate")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

fn show_loading(ui: &mut egui::Ui, app: &RefblendApp) {
    let message = app
        .ui_state
        .ticker
        .map(|t| t.message())
        .unwrap_or_default();
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.add(egui::Spinner::new().size(48.0));
        ui.add_space(12.0);
        ui.heading(LOADING_TITLE);
        ui.label(message);
    });
}

fn show_failure(ui: &mut egui::Ui, app: &mut RefblendApp, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 4.0);
        ui.heading(egui::RichText::new(message).color(egui::Color32::from_rgb(230, 90, 90)));
        ui.add_space(8.0);
        for tip in RETRY_TIPS {
            ui.label(tip);
        }
        ui.add_space(12.0);
        if ui.button("Try again").clicked() {
            app.start_generation();
        }
    });
}

fn show_grid(ui: &mut egui::Ui, app: &mut RefblendApp) {
    ui.horizontal(|ui| {
        ui.heading(format!("Results ({})", app.results.entries.len()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Save all...").clicked() {
                save_all_results(app);
            }
        });
    });
    ui.separator();

    let ratio = app.composition.job.aspect_ratio.ratio();
    let cell = egui::vec2(CELL_WIDTH, CELL_WIDTH / ratio);
    let mut view = None;
    let mut save = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for (i, entry) in app.results.entries.iter().enumerate() {
                ui.vertical(|ui| {
                    match entry.texture {
                        Some(ref texture) => {
                            let response = draw_texture_fitted(ui, texture, cell)
                                .on_hover_cursor(egui::CursorIcon::ZoomIn);
                            if response.clicked() {
                                view = Some(i);
                            }
                        }
                        None => {
                            let (rect, _) = ui.allocate_exact_size(cell, egui::Sense::hover());
                            ui.painter().text(
                                rect.center(),
                                egui::Align2::CENTER_CENTER,
                                "Preview unavailable",
                                egui::FontId::proportional(13.0),
                                egui::Color32::from_gray(110),
                            );
                        }
                    }
                    ui.horizontal(|ui| {
                        ui.label(format!("#{}", entry.image.index));
                        if ui
                            .add_enabled(entry.texture.is_some(), egui::Button::new("View"))
                            .clicked()
                        {
                            view = Some(i);
                        }
                        if ui.button("Save...").clicked() {
                            save = Some(i);
                        }
                    });
                });
            }
        });
    });

    if let Some(i) = view {
        app.open_viewer(i);
    }
    if let Some(entry) = save.and_then(|i| app.results.entries.get(i)) {
        save_result(app, entry.image.clone());
    }
}
