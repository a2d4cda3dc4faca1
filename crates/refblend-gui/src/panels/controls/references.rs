use crate::app::RefblendApp;
use crate::messages::SlotTarget;
use crate::panels::helpers::{draw_texture_fitted, pick_reference, section_header};

const THUMB_SIZE: egui::Vec2 = egui::vec2(120.0, 90.0);

pub(super) fn characters_section(ui: &mut egui::Ui, app: &mut RefblendApp) {
    let active = app.composition.job.slots.iter().filter(|s| s.is_active()).count();
    let status = format!("{active}/{}", app.composition.job.slots.len());
    section_header(ui, "Characters", Some(&status));
    ui.add_space(4.0);

    for i in 0..app.composition.job.slots.len() {
        ui.push_id(("slot", i), |ui| character_slot(ui, app, i));
        ui.add_space(4.0);
    }
}

fn character_slot(ui: &mut egui::Ui, app: &mut RefblendApp, i: usize) {
    let target = SlotTarget::Character(i);
    ui.horizontal(|ui| {
        slot_preview(ui, app, target);

        ui.vertical(|ui| {
            let slot = &mut app.composition.job.slots[i];
            ui.strong(&slot.label);
            ui.checkbox(&mut slot.toggles.remove_background, "Remove background");
            ui.checkbox(&mut slot.toggles.use_only_style, "Use only style");
            slot_buttons(ui, app, target);
        });
    });
}

pub(super) fn background_section(ui: &mut egui::Ui, app: &mut RefblendApp) {
    let status = if app.composition.job.background.image().is_some() {
        "set"
    } else {
        "optional"
    };
    section_header(ui, "Background", Some(status));
    ui.add_space(4.0);

    let target = SlotTarget::Background;
    ui.horizontal(|ui| {
        slot_preview(ui, app, target);

        ui.vertical(|ui| {
            let background = &mut app.composition.job.background;
            let has_image = background.image().is_some();
            let mut remove = background.toggles().remove_background;
            if ui
                .add_enabled(has_image, egui::Checkbox::new(&mut remove, "Remove background"))
                .changed()
            {
                background.set_remove_background(remove);
            }
            slot_buttons(ui, app, target);
        });
    });
}

fn slot_preview(ui: &mut egui::Ui, app: &RefblendApp, target: SlotTarget) {
    let preview = match target {
        SlotTarget::Character(i) => app.composition.slot_previews[i].as_ref(),
        SlotTarget::Background => app.composition.background_preview.as_ref(),
    };
    match preview {
        Some(p) => {
            draw_texture_fitted(ui, &p.texture, THUMB_SIZE).on_hover_text(&p.file_name);
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(THUMB_SIZE, egui::Sense::hover());
            ui.painter().rect_stroke(
                rect,
                4.0,
                egui::Stroke::new(1.0, egui::Color32::from_gray(80)),
                egui::StrokeKind::Inside,
            );
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "No image",
                egui::FontId::proportional(12.0),
                egui::Color32::from_gray(110),
            );
        }
    }
}

fn slot_buttons(ui: &mut egui::Ui, app: &mut RefblendApp, target: SlotTarget) {
    let has_image = match target {
        SlotTarget::Character(i) => app.composition.job.slots[i].is_active(),
        SlotTarget::Background => app.composition.job.background.image().is_some(),
    };
    ui.horizontal(|ui| {
        let label = if has_image { "Replace..." } else { "Upload..." };
        if ui.button(label).clicked() {
            pick_reference(app, target);
        }
        if ui.add_enabled(has_image, egui::Button::new("Remove")).clicked() {
            app.composition.clear_reference(target);
            app.ui_state.add_log(format!("{target}: removed"));
        }
    });
}
