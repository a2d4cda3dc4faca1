use refblend_core::viewer::{ImageDimensions, ScaleLimits, ViewerSession};

/// The pan/zoom viewer for one result image.
pub struct ViewportState {
    pub session: ViewerSession,
    pub texture: Option<egui::TextureHandle>,
    /// Index into the results grid of the image being viewed.
    pub open_index: Option<usize>,
}

impl ViewportState {
    pub fn new(limits: ScaleLimits) -> Self {
        Self {
            session: ViewerSession::new(limits),
            texture: None,
            open_index: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open_index.is_some()
    }

    /// Show a result. Without decoded pixels the session stays unloaded.
    pub fn open(&mut self, index: usize, texture: Option<egui::TextureHandle>) {
        self.session.open();
        match texture {
            Some(ref t) => {
                let [w, h] = t.size();
                self.session
                    .image_loaded(ImageDimensions::new(w as f32, h as f32));
            }
            None => self.session.image_failed(),
        }
        self.texture = texture;
        self.open_index = Some(index);
    }

    pub fn close(&mut self) {
        self.session.close();
        self.texture = None;
        self.open_index = None;
    }

    /// New zoom limits; closes the viewer.
    pub fn set_limits(&mut self, limits: ScaleLimits) {
        self.close();
        self.session = ViewerSession::new(limits);
    }
}
