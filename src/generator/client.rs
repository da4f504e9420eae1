use super::{GenerationError, GenerationService};
use crate::config::Config;
use crate::models::{GenerateRequest, GenerateResponse};
use crate::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

pub struct GeneratorClient {
    client: Client,
    url: String,
}

impl GeneratorClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::new_with_client(builder.build()?, config))
    }

    pub fn new_with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.generate_url(),
        }
    }
}

#[async_trait]
impl GenerationService for GeneratorClient {
    async fn generate_image(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        tracing::debug!("Sending image generation request to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&GenerateRequest::new(prompt))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send image generation request: {}", e);
                GenerationError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read image generation response: {}", e);
            GenerationError::Transport(e.to_string())
        })?;

        tracing::debug!("API response (status {}): {}", status, body);

        interpret_response(status, &body)
    }
}

/// Map a raw status and body to an image URL or a generation error.
fn interpret_response(
    status: StatusCode,
    body: &str,
) -> std::result::Result<String, GenerationError> {
    let parsed = serde_json::from_str::<GenerateResponse>(body);

    if !status.is_success() {
        let message = parsed
            .ok()
            .and_then(|response| response.error_message().map(str::to_string));
        return Err(GenerationError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    let response = parsed.map_err(|e| GenerationError::Malformed(e.to_string()))?;

    match response.usable_image_url() {
        Some(url) => Ok(url.to_string()),
        None => Err(GenerationError::MissingImageUrl {
            message: response.error_message().map(str::to_string),
        }),
    }
}
