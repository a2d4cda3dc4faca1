use thiserror::Error;

/// Problems with user input, reported before any generation call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please upload at least one reference image.")]
    NoReferenceImages,

    #[error("Please enter a prompt.")]
    EmptyPrompt,
}

/// Failures talking to the image-generation service.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("No API key found (set {0})")]
    MissingApiKey(String),

    #[error("Unexpected response from generation service: {0}")]
    MalformedResponse(String),

    #[error("All {attempted} generation calls failed")]
    AllFailed { attempted: usize },
}

#[derive(Error, Debug)]
pub enum RefblendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Image could not be decoded: {0}")]
    AssetLoad(#[from] image::ImageError),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Unsupported image type: {0}")]
    UnsupportedMime(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl RefblendError {
    /// Text suitable for showing to the user.
    ///
    /// Validation problems are shown as-is; anything coming out of the
    /// generation service collapses to a single retry message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(v) => v.to_string(),
            Self::Generation(_) => crate::consts::GENERIC_GENERATION_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RefblendError>;
