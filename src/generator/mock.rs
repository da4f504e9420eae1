use super::{GenerationError, GenerationService};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Response = std::result::Result<String, GenerationError>;

/// Handles are shared between clones, so a test can keep one for inspection.
#[derive(Clone)]
pub struct MockGeneratorClient {
    responses: Arc<Mutex<Vec<Response>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
    delay: Option<Duration>,
}

impl MockGeneratorClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            delay: None,
        }
    }

    pub fn with_image_url(self, url: String) -> Self {
        self.responses.lock().unwrap().push(Ok(url));
        self
    }

    pub fn with_error(self, error: GenerationError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    /// Sleep before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockGeneratorClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationService for MockGeneratorClient {
    async fn generate_image(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        let response = {
            let mut count = self.call_count.lock().unwrap();
            *count += 1;
            self.prompts.lock().unwrap().push(prompt.to_string());

            let responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                Ok("https://example.com/generated.png".to_string())
            } else {
                let index = (*count - 1) % responses.len();
                responses[index].clone()
            }
        };

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_generator_default_response() {
        let client = MockGeneratorClient::new();
        let url = client.generate_image("a cat").await.unwrap();
        assert!(url.starts_with("https://"));
        assert_eq!(client.prompts(), vec!["a cat".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_generator_cycles_responses() {
        let client = MockGeneratorClient::new()
            .with_image_url("https://x/1.png".to_string())
            .with_error(GenerationError::Transport("down".to_string()));

        assert_eq!(client.generate_image("a").await.unwrap(), "https://x/1.png");
        assert!(client.generate_image("b").await.is_err());

        // Should cycle back
        assert_eq!(client.generate_image("c").await.unwrap(), "https://x/1.png");
        assert_eq!(client.get_call_count(), 3);
    }
}
