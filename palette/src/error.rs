use crate::chat::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("OPENAI_API_KEY is not set; pass an API key or set the environment variable")]
    MissingCredential,
    #[error("description is required")]
    InvalidInput,
    #[error("model returned an empty response")]
    EmptyResponse,
    #[error("model returned invalid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

pub type Result<T, E = PaletteError> = std::result::Result<T, E>;
