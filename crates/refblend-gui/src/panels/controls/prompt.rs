use crate::app::RefblendApp;
use crate::panels::helpers::section_header;

pub(super) fn prompt_section(ui: &mut egui::Ui, app: &mut RefblendApp) {
    section_header(ui, "Prompt", None);
    ui.add_space(4.0);

    let response = ui.add(
        egui::TextEdit::multiline(&mut app.composition.job.prompt)
            .hint_text("Describe the image to create, e.g. both characters having coffee in the background scene")
            .desired_rows(5)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        app.ui_state.validation_error = None;
    }

    let fragments = app.composition.job.instruction_fragments();
    if !fragments.is_empty() {
        ui.add_space(4.0);
        egui::CollapsingHeader::new(format!("Instructions ({})", fragments.len()))
            .default_open(false)
            .show(ui, |ui| {
                for fragment in &fragments {
                    ui.small(fragment);
                }
            });
    }
}
