use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{api_key_from_env, GenerationConfig};
use crate::error::{GenerationError, Result};
use crate::prompt::decorate_prompt;
use crate::request::GenerationRequest;

use super::ImageGenerator;

/// Longest slice of an error body kept in [`GenerationError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Image generation through the Gemini `generateContent` REST endpoint.
pub struct GeminiGenerator {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiGenerator {
    pub fn new(api_key: impl Into<String>, config: &GenerationConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("refblend/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(GenerationError::from)?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
        })
    }

    /// Build a generator with the key taken from the environment.
    pub fn from_env(config: &GenerationConfig) -> Result<Self> {
        Self::new(api_key_from_env()?, config)
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

impl ImageGenerator for GeminiGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<Option<String>> {
        let body = request_body(request);
        debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(GenerationError::from)?;

        let status = response.status();
        if !status.is_success() {
            let mut text = response.text().unwrap_or_default();
            if text.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|&i| text.is_char_boundary(i))
                    .unwrap_or(0);
                text.truncate(cut);
            }
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        let text = response.text().map_err(GenerationError::from)?;
        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;
        let image = first_image(&parsed);
        if image.is_none() {
            debug!("Response carried no inline image");
        }
        Ok(image)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequestBody {
    contents: Vec<Content>,
    generation_config: GenerationSettings,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationSettings {
    response_modalities: Vec<&'static str>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub(crate) struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    #[serde(default)]
    mime_type: String,
    data: String,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct Candidate {
    content: Option<Content>,
}

/// References first, in order, then the decorated prompt text.
pub(crate) fn request_body(request: &GenerationRequest) -> GenerateRequestBody {
    let mut parts: Vec<Part> = request
        .references
        .iter()
        .map(|r| Part {
            text: None,
            inline_data: Some(InlineData {
                mime_type: r.mime_type.clone(),
                data: r.data_base64.clone(),
            }),
        })
        .collect();
    parts.push(Part {
        text: Some(decorate_prompt(
            &request.prompt,
            request.resolution,
            request.aspect_ratio,
        )),
        inline_data: None,
    });

    GenerateRequestBody {
        contents: vec![Content { parts }],
        generation_config: GenerationSettings {
            response_modalities: vec!["IMAGE", "TEXT"],
        },
    }
}

/// Base64 data of the first inline image in the first candidate.
pub(crate) fn first_image(response: &GenerateResponse) -> Option<String> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .find_map(|p| p.inline_data.as_ref().map(|d| d.data.clone()))
}
