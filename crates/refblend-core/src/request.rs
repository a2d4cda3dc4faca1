use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Output resolution hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[default]
    #[serde(rename = "2k")]
    TwoK,
    #[serde(rename = "4k")]
    FourK,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TwoK => write!(f, "2k"),
            Self::FourK => write!(f, "4k"),
        }
    }
}

impl Resolution {
    pub const ALL: [Resolution; 2] = [Resolution::TwoK, Resolution::FourK];

    pub fn label(self) -> &'static str {
        match self {
            Self::TwoK => "Standard 2K",
            Self::FourK => "Standard 4K",
        }
    }
}

/// Output aspect ratio hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Square => write!(f, "1:1"),
            Self::Landscape => write!(f, "16:9"),
            Self::Portrait => write!(f, "9:16"),
        }
    }
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] = [
        AspectRatio::Square,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
    ];

    /// Width divided by height.
    pub fn ratio(self) -> f32 {
        match self {
            Self::Square => 1.0,
            Self::Landscape => 16.0 / 9.0,
            Self::Portrait => 9.0 / 16.0,
        }
    }
}

/// An image ready to be sent as a reference: base64 data plus mime type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data_base64: String,
}

impl ImagePayload {
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data_base64: STANDARD.encode(bytes),
        }
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(self.data_base64.as_bytes())?)
    }
}

/// Everything one generation call needs.
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    /// Final instruction text, already composed.
    pub prompt: String,
    /// References in the order the prompt numbers them.
    pub references: Vec<ImagePayload>,
    pub resolution: Resolution,
    pub aspect_ratio: AspectRatio,
}

/// One successful result. `index` is 1-based within its batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedImage {
    pub index: usize,
    pub data_base64: String,
}

impl GeneratedImage {
    /// Raw PNG bytes.
    pub fn decode_png(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(self.data_base64.as_bytes())?)
    }

    pub fn file_name(&self) -> String {
        format!("generated_image_{}.png", self.index)
    }
}
