//! Image generation endpoint integration
//!
//! Sends a prompt to the remote `/generate` endpoint and returns the URL of
//! the generated image. Every way the round trip can fail is folded into
//! [`GenerationError`].

pub mod client;
pub mod mock;

pub use client::GeneratorClient;
pub use mock::MockGeneratorClient;

use async_trait::async_trait;
use thiserror::Error;

/// Message shown when the endpoint gives no usable explanation.
pub const FALLBACK_MESSAGE: &str = "Failed to generate image";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("endpoint returned status {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Rejected { status: u16, message: Option<String> },

    #[error("malformed response body: {0}")]
    Malformed(String),

    #[error("response did not include an image URL")]
    MissingImageUrl { message: Option<String> },
}

impl GenerationError {
    /// Text suitable for showing to the user.
    ///
    /// The server-supplied message wins when there is one; everything else
    /// collapses to [`FALLBACK_MESSAGE`].
    pub fn user_message(&self) -> &str {
        match self {
            GenerationError::Rejected {
                message: Some(message),
                ..
            }
            | GenerationError::MissingImageUrl {
                message: Some(message),
            } => message.as_str(),
            _ => FALLBACK_MESSAGE,
        }
    }
}

#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> std::result::Result<String, GenerationError>;
}
