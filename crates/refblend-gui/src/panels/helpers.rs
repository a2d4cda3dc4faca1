use refblend_core::request::GeneratedImage;

use crate::app::RefblendApp;
use crate::messages::{SlotTarget, WorkerCommand};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

/// Size that fits `image` inside `max` without changing its aspect.
pub(crate) fn fit_size(image: egui::Vec2, max: egui::Vec2) -> egui::Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return max;
    }
    let scale = (max.x / image.x).min(max.y / image.y);
    image * scale
}

/// Draw a texture scaled into a box of `max` size, centred.
pub(crate) fn draw_texture_fitted(
    ui: &mut egui::Ui,
    texture: &egui::TextureHandle,
    max: egui::Vec2,
) -> egui::Response {
    let [w, h] = texture.size();
    let (rect, response) = ui.allocate_exact_size(max, egui::Sense::click());
    let img_rect = egui::Rect::from_center_size(
        rect.center(),
        fit_size(egui::vec2(w as f32, h as f32), max),
    );
    ui.painter()
        .rect_filled(rect, 4.0, egui::Color32::from_gray(24));
    ui.painter().image(
        texture.id(),
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
    response
}

pub(crate) fn pick_reference(app: &RefblendApp, target: SlotTarget) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadReference { target, path });
        }
    });
}

pub(crate) fn save_result(app: &RefblendApp, image: GeneratedImage) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(image.file_name())
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveImage { image, path });
        }
    });
}

pub(crate) fn save_all_results(app: &RefblendApp) {
    let images = app.results.generated();
    if images.is_empty() {
        return;
    }
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(dir) = rfd::FileDialog::new().pick_folder() {
            let _ = cmd_tx.send(WorkerCommand::SaveAll { images, dir });
        }
    });
}
