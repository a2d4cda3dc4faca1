use crate::consts::{WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};

use super::geometry::{Point, ViewportBounds};
use super::session::ViewerSession;

/// Platform-neutral input for the viewer.
///
/// Pointer positions are relative to the viewport's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewerEvent {
    /// Primary button pressed over the image.
    PointerDown { pos: Point },
    PointerMove { pos: Point },
    PointerUp,
    /// Scroll wheel. Positive `delta_y` scrolls away from the user (zoom out).
    Wheel { delta_y: f32, pos: Option<Point> },
    ZoomInButton,
    ZoomOutButton,
    ResetButton,
    Resize(ViewportBounds),
}

/// Zoom factor for a wheel movement, `None` for a zero delta.
pub fn wheel_factor(delta_y: f32) -> Option<f32> {
    if delta_y > 0.0 {
        Some(WHEEL_ZOOM_OUT)
    } else if delta_y < 0.0 {
        Some(WHEEL_ZOOM_IN)
    } else {
        None
    }
}

impl ViewerSession {
    /// Dispatch one input event. Returns `true` if the transform or the pan
    /// state changed and the host should redraw.
    pub fn handle(&mut self, event: ViewerEvent) -> bool {
        match event {
            ViewerEvent::PointerDown { pos } => self.begin_pan(pos),
            ViewerEvent::PointerMove { pos } => self.pan_to(pos),
            ViewerEvent::PointerUp => self.end_pan(),
            ViewerEvent::Wheel { delta_y, pos } => match wheel_factor(delta_y) {
                Some(factor) => self.zoom_at(factor, pos),
                None => false,
            },
            ViewerEvent::ZoomInButton => self.zoom_in(),
            ViewerEvent::ZoomOutButton => self.zoom_out(),
            ViewerEvent::ResetButton => {
                let before = self.transform();
                self.reset();
                before != self.transform()
            }
            ViewerEvent::Resize(bounds) => {
                let before = self.transform();
                self.resize(bounds);
                before != self.transform()
            }
        }
    }
}
