mod options;
mod prompt;
mod references;

const LEFT_PANEL_WIDTH: f32 = 320.0;

pub fn show(ctx: &egui::Context, app: &mut crate::app::RefblendApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                references::characters_section(ui, app);
                ui.separator();
                references::background_section(ui, app);
                ui.separator();
                prompt::prompt_section(ui, app);
                ui.separator();
                options::options_section(ui, app);
                ui.separator();
                options::generate_section(ui, app);
            });
        });
}
