/// Smallest zoom factor the viewer allows.
pub const MIN_SCALE: f32 = 0.1;

/// Largest zoom factor the viewer allows.
pub const MAX_SCALE: f32 = 8.0;

/// Scaled image must exceed the viewport by more than this many pixels on an
/// axis before drag panning is enabled.
pub const PAN_TOLERANCE: f32 = 1.0;

/// Multiplicative step for one wheel notch towards the user.
pub const WHEEL_ZOOM_IN: f32 = 1.1;

/// Multiplicative step for one wheel notch away from the user.
pub const WHEEL_ZOOM_OUT: f32 = 1.0 / 1.1;

/// Zoom step of the "+" button.
pub const BUTTON_ZOOM_IN: f32 = 1.2;

/// Zoom step of the "-" button.
pub const BUTTON_ZOOM_OUT: f32 = 0.8;

/// Number of character reference slots.
pub const CHARACTER_SLOT_COUNT: usize = 4;

/// Number of independent generation calls per request.
pub const DEFAULT_BATCH_SIZE: usize = 4;

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Default REST endpoint of the generation service.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables checked (in order) for the API key.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Per-call HTTP timeout in seconds. Image generation is slow.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// How long each loading message stays on screen, in milliseconds.
pub const LOADING_MESSAGE_INTERVAL_MS: u64 = 2_500;

/// Shown whenever a generation batch yields nothing.
pub const GENERIC_GENERATION_ERROR: &str =
    "Oops, something went wrong while generating images. Please try again.";
