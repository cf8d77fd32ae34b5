//! Generation gateway: structured parameters to prompt, prompt to provider,
//! provider text to a [`GeneratedContent`] record.

mod client;
mod prompts;

pub use client::{LlmClient, ProviderError, SamplingParams};

use chrono::Utc;

use crate::models::{ContentGenerationParams, GeneratedContent};

/// Budget for full-length generation.
pub const GENERATE_SAMPLING: SamplingParams = SamplingParams {
    max_new_tokens: 1000,
    temperature: 0.7,
};

/// Roughly 100 characters.
pub const SHORT_SAMPLING: SamplingParams = SamplingParams {
    max_new_tokens: 30,
    temperature: 0.7,
};

pub const ANALYZE_SAMPLING: SamplingParams = SamplingParams {
    max_new_tokens: 500,
    temperature: 0.5,
};

const EMPTY_GENERATION: &str = "No content generated";
const EMPTY_ANALYSIS: &str = "No analysis generated";

/// Provider failures, collapsed to a generic message for callers.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Failed to generate content")]
    Generate(#[source] ProviderError),
    #[error("Failed to analyze content")]
    Analyze(#[source] ProviderError),
}

pub struct Generator {
    client: LlmClient,
}

impl Generator {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }

    /// Render the template for `params` and generate full-length content.
    pub async fn generate(
        &self,
        params: &ContentGenerationParams,
    ) -> Result<GeneratedContent, GenerationError> {
        self.generate_with(params, GENERATE_SAMPLING).await
    }

    /// Short answer to a free-form prompt, sent as a social-media generation.
    pub async fn generate_short(&self, prompt: &str) -> Result<GeneratedContent, GenerationError> {
        let params = prompts::short_reply_params(prompt);
        self.generate_with(&params, SHORT_SAMPLING).await
    }

    /// Ask the provider for feedback on a piece of content.
    pub async fn analyze(&self, content: &str) -> Result<String, GenerationError> {
        let prompt = prompts::analysis_prompt(content);
        let text = self
            .client
            .text_generation(&prompt, ANALYZE_SAMPLING)
            .await
            .map_err(GenerationError::Analyze)?;

        Ok(non_empty_or(text, EMPTY_ANALYSIS))
    }

    async fn generate_with(
        &self,
        params: &ContentGenerationParams,
        sampling: SamplingParams,
    ) -> Result<GeneratedContent, GenerationError> {
        let prompt = prompts::render_prompt(params);
        tracing::debug!(content_type = ?params.content_type(), "Rendered prompt: {}", prompt);

        let text = self
            .client
            .text_generation(&prompt, sampling)
            .await
            .map_err(GenerationError::Generate)?;

        Ok(GeneratedContent {
            id: uuid::Uuid::new_v4().to_string(),
            content: non_empty_or(text, EMPTY_GENERATION),
            content_type: params.content_type(),
            created_at: Utc::now(),
        })
    }
}

fn non_empty_or(text: String, fallback: &str) -> String {
    if text.is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LlmConfig;
    use crate::models::{BlogPostParams, ContentType};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn generator_for(server: &MockServer) -> Generator {
        let config = LlmConfig {
            endpoint: server.uri(),
            model: "test-model".to_string(),
            api_token: Some("hf-token".to_string()),
            timeout_secs: Some(5),
        };
        Generator::new(LlmClient::new(&config).unwrap())
    }

    fn blog_params() -> ContentGenerationParams {
        ContentGenerationParams::BlogPost(BlogPostParams {
            topic: "Ownership".to_string(),
            keywords: vec!["borrowing".to_string()],
        })
    }

    #[tokio::test]
    async fn test_generate_wraps_provider_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/test-model"))
            .and(header("authorization", "Bearer hf-token"))
            .and(body_partial_json(json!({
                "parameters": { "max_new_tokens": 1000, "temperature": 0.7 }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "generated_text": "A post" }])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let generated = generator_for(&server).generate(&blog_params()).await.unwrap();

        assert_eq!(generated.content, "A post");
        assert_eq!(generated.content_type, ContentType::BlogPost);
        assert!(!generated.id.is_empty());
    }

    #[tokio::test]
    async fn test_generate_short_uses_small_budget() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "parameters": { "max_new_tokens": 30 }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "generated_text": "Short." }])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let generated = generator_for(&server).generate_short("Hi").await.unwrap();

        assert_eq!(generated.content, "Short.");
        assert_eq!(generated.content_type, ContentType::SocialMedia);
    }

    #[tokio::test]
    async fn test_empty_text_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let generated = generator.generate(&blog_params()).await.unwrap();
        assert_eq!(generated.content, EMPTY_GENERATION);
        assert_eq!(generator.analyze("x").await.unwrap(), EMPTY_ANALYSIS);
    }

    #[tokio::test]
    async fn test_provider_failure_is_generic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
            .mount(&server)
            .await;

        let generator = generator_for(&server);
        let err = generator.generate(&blog_params()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate content");
        assert!(matches!(
            err,
            GenerationError::Generate(ProviderError::Status { status: 503, .. })
        ));

        let err = generator.analyze("draft").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to analyze content");
    }
}
