use crate::app::RefblendApp;

pub fn show(ctx: &egui::Context, app: &mut RefblendApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Progress bar
        if app.ui_state.is_busy() {
            let done = app.ui_state.progress_done;
            let total = app.ui_state.progress_total;
            let fraction = if total > 0 {
                done as f32 / total as f32
            } else {
                0.0
            };
            let message = app
                .ui_state
                .ticker
                .map(|t| t.message())
                .unwrap_or_default();
            ui.add(
                egui::ProgressBar::new(fraction)
                    .text(format!("{message} ({done}/{total})"))
                    .animate(true),
            );
        } else {
            // Invisible placeholder, same height, no animation
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            let session = &app.viewport.session;
            if let Some(dims) = session.image_dimensions().filter(|_| app.viewport.is_open()) {
                ui.label(format!("{}x{}", dims.width, dims.height));
                ui.separator();
                ui.label(format!("Zoom: {:.0}%", session.transform().scale * 100.0));
                ui.separator();
                ui.label(format!("View: {}", session.state()));
                ui.separator();
            }
            ui.label(format!("Model: {}", app.config.generation.model));
            ui.separator();
            ui.label(format!("Batch: {}", app.config.generation.batch_size));
        });

        ui.add_space(2.0);
    });
}
