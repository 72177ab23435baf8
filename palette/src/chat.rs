use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, error};

use crate::api::{ChatCompletionRequest, ChatCompletionResponse};
use crate::config::PaletteConfig;
use crate::error::{PaletteError, Result};

const COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("completion endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Sends one chat-completion request and returns the first choice's content.
///
/// Implementations own transport and vendor details. `Ok(None)` means the call
/// succeeded but the model produced no content.
pub trait ChatClient {
    fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> std::result::Result<Option<String>, TransportError>;
}

impl<C: ChatClient + ?Sized> ChatClient for &C {
    fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> std::result::Result<Option<String>, TransportError> {
        (**self).complete(request)
    }
}

/// Blocking client for OpenAI-compatible `/chat/completions` endpoints.
///
/// The underlying connection pool is reused across sequential calls.
#[derive(Debug)]
pub struct OpenAiClient {
    http: Client,
    endpoint: String,
    config: PaletteConfig,
}

impl OpenAiClient {
    pub fn new(config: PaletteConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(PaletteError::Client)?;

        Ok(Self {
            http,
            endpoint: format!("{}{COMPLETIONS_PATH}", config.base_url()),
            config,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatClient for OpenAiClient {
    fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> std::result::Result<Option<String>, TransportError> {
        debug!(
            target: "color_palette::chat",
            endpoint = %self.endpoint,
            model = %request.model,
            "sending chat completion request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.config.api_key())
            .header(ACCEPT, "application/json")
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            error!(status = status.as_u16(), "chat completion request failed");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json()?;
        Ok(completion.into_content())
    }
}
