//! Client for a Hugging Face style text-generation endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LlmConfig;

/// Sampling parameters for one call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[derive(Debug, Serialize)]
struct TextGenerationRequest<'a> {
    inputs: &'a str,
    parameters: RequestParameters,
}

#[derive(Debug, Serialize)]
struct RequestParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    #[serde(default)]
    generated_text: Option<String>,
}

/// The endpoint answers with either a list or a single object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextGenerationResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
}

impl TextGenerationResponse {
    fn into_text(self) -> Option<String> {
        match self {
            TextGenerationResponse::Batch(items) => {
                items.into_iter().next().and_then(|g| g.generated_text)
            }
            TextGenerationResponse::Single(g) => g.generated_text,
        }
    }
}

pub struct LlmClient {
    client: Client,
    endpoint: String,
    model: String,
    api_token: Option<String>,
}

impl LlmClient {
    pub fn new(config: &LlmConfig) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_token: config.api_token.clone(),
        })
    }

    /// Send one prompt and return the generated text, empty if the provider sent none.
    pub async fn text_generation(
        &self,
        prompt: &str,
        sampling: SamplingParams,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/models/{}", self.endpoint, self.model);
        debug!(model = %self.model, max_new_tokens = sampling.max_new_tokens, "Calling text-generation provider");

        let body = TextGenerationRequest {
            inputs: prompt,
            parameters: RequestParameters {
                max_new_tokens: sampling.max_new_tokens,
                temperature: sampling.temperature,
                return_full_text: false,
            },
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: TextGenerationResponse =
            serde_json::from_str(&text).map_err(|e| ProviderError::Decode(e.to_string()))?;
        Ok(parsed.into_text().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shapes() {
        let batch: TextGenerationResponse =
            serde_json::from_str(r#"[{"generated_text":"hello"}]"#).unwrap();
        assert_eq!(batch.into_text().as_deref(), Some("hello"));

        let single: TextGenerationResponse =
            serde_json::from_str(r#"{"generated_text":"hi"}"#).unwrap();
        assert_eq!(single.into_text().as_deref(), Some("hi"));

        let empty: TextGenerationResponse = serde_json::from_str("[]").unwrap();
        assert_eq!(empty.into_text(), None);
    }
}
