//! Content file model with its append-only version history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of content a file holds or a generation request produces.
///
/// The browser client's camelCase names are accepted on input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    #[serde(alias = "blogPost")]
    BlogPost,
    #[serde(alias = "socialMedia")]
    SocialMedia,
    #[serde(alias = "productDescription")]
    ProductDescription,
    #[serde(alias = "emailNewsletter")]
    EmailNewsletter,
    #[serde(alias = "pressRelease")]
    PressRelease,
}

/// One immutable snapshot of a content file's text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentVersion {
    pub id: String,
    pub content: String,
    pub version_number: u32,
    pub created_at: DateTime<Utc>,
}

/// A named text artifact belonging to a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentFile {
    pub id: String,
    pub name: String,
    pub content_type: ContentType,
    pub project_id: String,
    pub versions: Vec<ContentVersion>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentFile {
    /// The most recent version. Files are created with one version and never truncated.
    pub fn latest_version(&self) -> Option<&ContentVersion> {
        self.versions.last()
    }
}

/// Request body for creating a content file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentFileRequest {
    pub project_id: String,
    pub name: String,
    pub content_type: ContentType,
    pub content: String,
}

/// Request body for updating a content file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContentFileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_accepts_client_aliases() {
        let parsed: ContentType = serde_json::from_str("\"blogPost\"").unwrap();
        assert_eq!(parsed, ContentType::BlogPost);
        let parsed: ContentType = serde_json::from_str("\"PRESS_RELEASE\"").unwrap();
        assert_eq!(parsed, ContentType::PressRelease);
        assert_eq!(
            serde_json::to_string(&ContentType::EmailNewsletter).unwrap(),
            "\"EMAIL_NEWSLETTER\""
        );
    }
}
