use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::api::{ChatCompletionRequest, ChatMessage, ResponseFormat};
use crate::chat::{ChatClient, OpenAiClient};
use crate::config::{PaletteConfig, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::error::{PaletteError, Result};
use crate::hex::HexColor;
use crate::prompt::PaletteRequest;
use crate::response::parse_palette;

/// A generated palette together with what was asked for and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteMetadata {
    pub colors: Vec<HexColor>,
    pub description: String,
    pub count: usize,
    pub timestamp: String,
}

/// Turns text descriptions into palettes, one completion request per call.
///
/// Calls are independent; only the client handle is shared between them.
#[derive(Debug)]
pub struct PaletteRequester<C = OpenAiClient> {
    client: C,
    model: String,
    temperature: f32,
}

impl PaletteRequester<OpenAiClient> {
    pub fn new(config: PaletteConfig) -> Result<Self> {
        let model = config.model().to_string();
        let temperature = config.temperature();
        let client = OpenAiClient::new(config)?;
        Ok(Self::from_parts(client, model, temperature))
    }

    pub fn from_env() -> Result<Self> {
        Self::new(PaletteConfig::from_env()?)
    }
}

impl<C: ChatClient> PaletteRequester<C> {
    /// Uses an already constructed client with the default model settings.
    pub fn with_client(client: C) -> Self {
        Self::from_parts(client, DEFAULT_MODEL.to_string(), DEFAULT_TEMPERATURE)
    }

    /// Uses an already constructed client with the model and temperature of
    /// `config`. Endpoint and credential settings belong to the client.
    pub fn with_client_and_config(client: C, config: &PaletteConfig) -> Self {
        Self::from_parts(client, config.model().to_string(), config.temperature())
    }

    fn from_parts(client: C, model: String, temperature: f32) -> Self {
        Self {
            client,
            model,
            temperature,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    /// Generates up to `count` distinct colors for `description`.
    ///
    /// `count` is clamped to `5..=8`. The palette may be shorter than requested
    /// when the model produces fewer valid colors.
    pub fn generate(&self, description: &str, count: i64) -> Result<Vec<HexColor>> {
        let request = PaletteRequest::new(description, count)?;
        let completion = self.completion_request(&request);

        debug!(
            description = request.description(),
            count = request.count(),
            model = %self.model,
            "requesting palette"
        );

        let content = self
            .client
            .complete(&completion)?
            .ok_or(PaletteError::EmptyResponse)?;
        let palette = parse_palette(&content, request.count())?;

        info!(
            target: "color_palette::requester",
            requested = request.count(),
            returned = palette.len(),
            "palette generated"
        );

        Ok(palette)
    }

    pub fn generate_with_metadata(&self, description: &str, count: i64) -> Result<PaletteMetadata> {
        let colors = self.generate(description, count)?;
        Ok(PaletteMetadata {
            count: colors.len(),
            colors,
            description: description.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    fn completion_request(&self, request: &PaletteRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            response_format: ResponseFormat::JsonObject,
            messages: vec![
                ChatMessage::system(request.system_prompt()),
                ChatMessage::user(request.user_prompt()),
            ],
        }
    }
}
