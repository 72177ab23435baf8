pub mod api;
pub mod chat;
pub mod config;
mod error;
pub mod hex;
pub mod prompt;
pub mod requester;
pub mod response;

pub use chat::{ChatClient, OpenAiClient, TransportError};
pub use config::PaletteConfig;
pub use error::{PaletteError, Result};
pub use hex::HexColor;
pub use prompt::{PaletteRequest, DEFAULT_COUNT, MAX_COLORS, MIN_COLORS};
pub use requester::{PaletteMetadata, PaletteRequester};
