use tracing::debug;

use crate::consts::{BUTTON_ZOOM_IN, BUTTON_ZOOM_OUT};

use super::geometry::{ImageDimensions, Point, ScaleLimits, Transform, ViewportBounds};
use super::transform::{compute_fit_transform, is_pannable, pan_by, zoom_at};

/// Lifecycle of the viewer's transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerState {
    /// No image, or the image has not finished loading (or failed to).
    Unloaded,
    /// Transform equals the fit-to-view transform.
    FittedView,
    /// Zoomed or panned away from the fit.
    UserTransformed,
}

impl std::fmt::Display for ViewerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unloaded => write!(f, "Unloaded"),
            Self::FittedView => write!(f, "Fit"),
            Self::UserTransformed => write!(f, "Custom"),
        }
    }
}

/// Pointer cursor the host should show over the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerCursor {
    Default,
    Grab,
    Grabbing,
}

/// Captured at pointer-down; moves are applied relative to it.
#[derive(Clone, Copy, Debug)]
struct PanAnchor {
    pointer: Point,
    position: Point,
}

/// Transform state for the single open image.
///
/// The host feeds it the image size once decoded and the viewport size on
/// every layout change; everything else is driven by zoom and pan calls.
#[derive(Clone, Debug)]
pub struct ViewerSession {
    limits: ScaleLimits,
    viewport: Option<ViewportBounds>,
    image: Option<ImageDimensions>,
    has_source: bool,
    transform: Transform,
    initial_transform: Transform,
    state: ViewerState,
    pan: Option<PanAnchor>,
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new(ScaleLimits::default())
    }
}

impl ViewerSession {
    pub fn new(limits: ScaleLimits) -> Self {
        let limits = if limits.is_valid() {
            limits
        } else {
            ScaleLimits::default()
        };
        Self {
            limits,
            viewport: None,
            image: None,
            has_source: false,
            transform: Transform::IDENTITY,
            initial_transform: Transform::IDENTITY,
            state: ViewerState::Unloaded,
            pan: None,
        }
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn initial_transform(&self) -> Transform {
        self.initial_transform
    }

    pub fn image_dimensions(&self) -> Option<ImageDimensions> {
        self.image
    }

    pub fn viewport(&self) -> Option<ViewportBounds> {
        self.viewport
    }

    /// A source is set, whether or not it has finished loading.
    pub fn has_source(&self) -> bool {
        self.has_source
    }

    pub fn is_loaded(&self) -> bool {
        self.state != ViewerState::Unloaded
    }

    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Zoom limits. A fit below `limits.min` is only reachable again
    /// through [`reset`](Self::reset).
    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    /// A new image source replaces whatever was shown. Dimensions are
    /// unknown until [`image_loaded`](Self::image_loaded).
    pub fn open(&mut self) {
        self.clear();
        self.has_source = true;
    }

    /// The source decoded successfully.
    pub fn image_loaded(&mut self, dims: ImageDimensions) {
        if !self.has_source {
            return;
        }
        if !dims.is_usable() {
            self.image_failed();
            return;
        }
        debug!(width = dims.width, height = dims.height, "Viewer image loaded");
        self.image = Some(dims);
        self.fit();
    }

    /// The source could not be decoded; stay unloaded.
    pub fn image_failed(&mut self) {
        debug!("Viewer image failed to load");
        self.image = None;
        self.pan = None;
        self.state = ViewerState::Unloaded;
    }

    /// Source removed: all state cleared.
    pub fn close(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.image = None;
        self.has_source = false;
        self.transform = Transform::IDENTITY;
        self.initial_transform = Transform::IDENTITY;
        self.state = ViewerState::Unloaded;
        self.pan = None;
    }

    /// Viewport changed size. Always refits, discarding user zoom and pan.
    pub fn resize(&mut self, viewport: ViewportBounds) {
        if self.viewport == Some(viewport) {
            return;
        }
        self.viewport = Some(viewport);
        self.fit();
    }

    /// Restore the fit-to-view transform.
    pub fn reset(&mut self) {
        self.fit();
    }

    fn fit(&mut self) {
        self.pan = None;
        let (Some(image), Some(viewport)) = (self.image, self.viewport) else {
            return;
        };
        match compute_fit_transform(image, viewport) {
            Some(fit) => {
                self.transform = fit;
                self.initial_transform = fit;
                self.state = ViewerState::FittedView;
            }
            None => {
                // Zero-sized viewport (e.g. minimised window): keep waiting.
                self.state = ViewerState::Unloaded;
            }
        }
    }

    fn loaded_geometry(&self) -> Option<(ImageDimensions, ViewportBounds)> {
        if !self.is_loaded() {
            return None;
        }
        Some((self.image?, self.viewport?))
    }

    /// Zoom by `factor` keeping `focal` fixed (viewport centre when `None`).
    pub fn zoom_at(&mut self, factor: f32, focal: Option<Point>) -> bool {
        let Some((image, viewport)) = self.loaded_geometry() else {
            return false;
        };
        let limits = self.limits;
        // Already at the limit in this direction.
        if limits.clamp(self.transform.scale * factor) == self.transform.scale {
            return false;
        }
        let next = zoom_at(self.transform, factor, focal, image, viewport, limits);
        self.apply(next)
    }

    pub fn zoom_in(&mut self) -> bool {
        self.zoom_at(BUTTON_ZOOM_IN, None)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom_at(BUTTON_ZOOM_OUT, None)
    }

    pub fn can_zoom_in(&self) -> bool {
        self.is_loaded() && self.transform.scale < self.limits.max
    }

    pub fn can_zoom_out(&self) -> bool {
        self.is_loaded() && self.transform.scale > self.limits.min
    }

    /// The image currently overflows the viewport enough to be dragged.
    pub fn is_pannable(&self) -> bool {
        match self.loaded_geometry() {
            Some((image, viewport)) => is_pannable(self.transform.scale, image, viewport),
            None => false,
        }
    }

    /// Start a drag at `pointer`. Ignored when the image is not pannable.
    pub fn begin_pan(&mut self, pointer: Point) -> bool {
        if !self.is_pannable() || !pointer.is_finite() {
            return false;
        }
        self.pan = Some(PanAnchor {
            pointer,
            position: self.transform.position(),
        });
        true
    }

    /// Pointer moved during a drag. The offset from the drag start is
    /// applied to the position captured at the start.
    pub fn pan_to(&mut self, pointer: Point) -> bool {
        let Some(anchor) = self.pan else {
            return false;
        };
        let Some((image, viewport)) = self.loaded_geometry() else {
            return false;
        };
        let delta = pointer - anchor.pointer;
        let start = self.transform.with_position(anchor.position);
        let next = pan_by(start, delta, image, viewport);
        self.apply(next)
    }

    pub fn end_pan(&mut self) -> bool {
        self.pan.take().is_some()
    }

    pub fn cursor(&self) -> ViewerCursor {
        if self.is_panning() {
            ViewerCursor::Grabbing
        } else if self.is_pannable() {
            ViewerCursor::Grab
        } else {
            ViewerCursor::Default
        }
    }

    fn apply(&mut self, next: Transform) -> bool {
        if !next.is_finite() || next == self.transform {
            return false;
        }
        self.transform = next;
        self.state = if next == self.initial_transform {
            ViewerState::FittedView
        } else {
            ViewerState::UserTransformed
        };
        true
    }
}
