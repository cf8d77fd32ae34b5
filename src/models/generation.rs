//! Generation request and result models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ContentType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostParams {
    pub topic: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaParams {
    pub platform: String,
    pub goal: String,
    pub target_audience: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDescriptionParams {
    pub product_name: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailNewsletterParams {
    pub subject: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    pub audience: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PressReleaseParams {
    pub announcement: String,
    pub company_info: String,
    #[serde(default)]
    pub quotes: Vec<String>,
}

/// Generation parameters, tagged by `contentType`. Each kind carries only its own fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "contentType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentGenerationParams {
    #[serde(alias = "blogPost")]
    BlogPost(BlogPostParams),
    #[serde(alias = "socialMedia")]
    SocialMedia(SocialMediaParams),
    #[serde(alias = "productDescription")]
    ProductDescription(ProductDescriptionParams),
    #[serde(alias = "emailNewsletter")]
    EmailNewsletter(EmailNewsletterParams),
    #[serde(alias = "pressRelease")]
    PressRelease(PressReleaseParams),
}

impl ContentGenerationParams {
    pub fn content_type(&self) -> ContentType {
        match self {
            ContentGenerationParams::BlogPost(_) => ContentType::BlogPost,
            ContentGenerationParams::SocialMedia(_) => ContentType::SocialMedia,
            ContentGenerationParams::ProductDescription(_) => ContentType::ProductDescription,
            ContentGenerationParams::EmailNewsletter(_) => ContentType::EmailNewsletter,
            ContentGenerationParams::PressRelease(_) => ContentType::PressRelease,
        }
    }
}

/// Text returned by the provider, wrapped for the caller. Not stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub id: String,
    pub content: String,
    pub content_type: ContentType,
    pub created_at: DateTime<Utc>,
}

/// Request body for `/generate-short`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortGenerationRequest {
    #[serde(default)]
    pub prompt: String,
}

/// Request body for `/analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub content: GeneratedContent,
    /// Milliseconds spent waiting on the provider
    pub execution_time: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub analysis: String,
    pub execution_time: u64,
}
