use refblend_core::request::{AspectRatio, Resolution};

use crate::app::RefblendApp;
use crate::panels::helpers::section_header;

pub(super) fn options_section(ui: &mut egui::Ui, app: &mut RefblendApp) {
    section_header(ui, "Output", None);
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("Resolution");
        for res in Resolution::ALL {
            ui.radio_value(&mut app.composition.job.resolution, res, res.label());
        }
    });

    ui.horizontal(|ui| {
        ui.label("Aspect ratio");
        for ar in AspectRatio::ALL {
            ui.selectable_value(&mut app.composition.job.aspect_ratio, ar, ar.to_string());
        }
    });

    ui.add(
        egui::Slider::new(&mut app.config.generation.batch_size, 1..=8)
            .text("Images per batch")
            .clamping(egui::SliderClamping::Always),
    );
}

pub(super) fn generate_section(ui: &mut egui::Ui, app: &mut RefblendApp) {
    let busy = app.ui_state.is_busy();
    ui.vertical_centered_justified(|ui| {
        let label = if busy { "Generating..." } else { "Generate" };
        if ui
            .add_enabled(!busy, egui::Button::new(egui::RichText::new(label).strong()))
            .clicked()
        {
            app.start_generation();
        }
    });

    if let Some(ref message) = app.ui_state.validation_error {
        ui.add_space(4.0);
        ui.colored_label(egui::Color32::from_rgb(230, 90, 90), message);
    }
}
