use refblend_core::viewer::{Point, Size, ViewerCursor, ViewerEvent};

use crate::app::RefblendApp;
use crate::panels::helpers::save_result;

pub fn show(ctx: &egui::Context, app: &mut RefblendApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        toolbar(ui, app);
        ui.separator();

        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);
        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        let session = &mut app.viewport.session;
        session.handle(ViewerEvent::Resize(Size::new(rect.width(), rect.height())));

        for event in collect_events(ui, &response, rect) {
            session.handle(event);
        }

        match session.cursor() {
            ViewerCursor::Grabbing => ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing),
            ViewerCursor::Grab if response.hovered() => {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grab)
            }
            _ => {}
        }

        match app.viewport.texture {
            Some(ref texture) if app.viewport.session.is_loaded() => {
                let t = app.viewport.session.transform();
                let [w, h] = texture.size();
                let img_rect = egui::Rect::from_min_size(
                    rect.min + egui::vec2(t.x, t.y),
                    egui::vec2(w as f32 * t.scale, h as f32 * t.scale),
                );
                ui.painter_at(rect).image(
                    texture.id(),
                    img_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            _ => show_unavailable(ui, rect),
        }

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            app.viewport.close();
        }
    });
}

fn toolbar(ui: &mut egui::Ui, app: &mut RefblendApp) {
    ui.horizontal(|ui| {
        if ui.button("\u{2190} Back").clicked() {
            app.viewport.close();
            return;
        }
        ui.separator();

        let session = &mut app.viewport.session;
        if ui
            .add_enabled(session.can_zoom_out(), egui::Button::new("\u{2212}"))
            .on_hover_text("Zoom out")
            .clicked()
        {
            session.handle(ViewerEvent::ZoomOutButton);
        }
        ui.label(format!("{:.0}%", session.transform().scale * 100.0));
        if ui
            .add_enabled(session.can_zoom_in(), egui::Button::new("+"))
            .on_hover_text("Zoom in")
            .clicked()
        {
            session.handle(ViewerEvent::ZoomInButton);
        }
        if ui
            .add_enabled(session.is_loaded(), egui::Button::new("Fit"))
            .on_hover_text("Reset zoom and position")
            .clicked()
        {
            session.handle(ViewerEvent::ResetButton);
        }

        let entry = app
            .viewport
            .open_index
            .and_then(|i| app.results.entries.get(i))
            .map(|e| e.image.clone());
        if let Some(image) = entry {
            ui.separator();
            ui.label(format!("Image #{}", image.index));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save...").clicked() {
                    save_result(app, image);
                }
            });
        }
    });
}

/// Translate this frame's egui input over the image area into viewer events.
/// Positions are relative to the top-left of `rect`.
fn collect_events(ui: &egui::Ui, response: &egui::Response, rect: egui::Rect) -> Vec<ViewerEvent> {
    let to_local = |p: egui::Pos2| Point::new(p.x - rect.min.x, p.y - rect.min.y);
    let mut events = Vec::new();

    if response.drag_started_by(egui::PointerButton::Primary) {
        let press = ui.input(|i| i.pointer.press_origin());
        events.extend(pointer_down(press, response.interact_pointer_pos(), rect));
    }
    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(ViewerEvent::PointerMove { pos: to_local(pos) });
        }
    }
    if response.drag_stopped() {
        events.push(ViewerEvent::PointerUp);
    }

    if response.hovered() {
        // egui reports scrolling up as positive; the viewer zooms out on positive.
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            let pos = ui.input(|i| i.pointer.hover_pos()).map(to_local);
            events.push(ViewerEvent::Wheel {
                delta_y: -scroll,
                pos,
            });
        }
    }

    if response.double_clicked() {
        events.push(ViewerEvent::ResetButton);
    }

    events
}

/// Drags are reported once egui's threshold is crossed, so anchor at the
/// press point and fall back to the current pointer.
fn pointer_down(
    press_origin: Option<egui::Pos2>,
    pointer: Option<egui::Pos2>,
    rect: egui::Rect,
) -> Option<ViewerEvent> {
    let pos = press_origin.or(pointer)?;
    Some(ViewerEvent::PointerDown {
        pos: Point::new(pos.x - rect.min.x, pos.y - rect.min.y),
    })
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn show_unavailable(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "This image could not be displayed",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(200.0, 50.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn test_pointer_down_uses_press_origin() {
        let event = pointer_down(
            Some(egui::pos2(300.0, 150.0)),
            Some(egui::pos2(306.0, 150.0)),
            viewer_rect(),
        );
        assert_eq!(
            event,
            Some(ViewerEvent::PointerDown {
                pos: Point::new(100.0, 100.0)
            })
        );
    }

    #[test]
    fn test_pointer_down_falls_back_to_pointer() {
        let event = pointer_down(None, Some(egui::pos2(306.0, 150.0)), viewer_rect());
        assert_eq!(
            event,
            Some(ViewerEvent::PointerDown {
                pos: Point::new(106.0, 100.0)
            })
        );
        assert_eq!(pointer_down(None, None, viewer_rect()), None);
    }
}
