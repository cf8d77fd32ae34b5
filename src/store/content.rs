//! Content file store with append-only version history.

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::{new_id, refreshed_at};
use crate::errors::AppError;
use crate::models::{ContentFile, ContentType, ContentVersion, UpdateContentFileRequest};

#[derive(Default)]
pub struct ContentStore {
    files: RwLock<IndexMap<String, ContentFile>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a content file holding `content` as version 1.
    pub async fn create(
        &self,
        project_id: &str,
        name: &str,
        content_type: ContentType,
        content: &str,
    ) -> ContentFile {
        let now = Utc::now();
        let file = ContentFile {
            id: new_id(),
            name: name.to_string(),
            content_type,
            project_id: project_id.to_string(),
            versions: vec![ContentVersion {
                id: new_id(),
                content: content.to_string(),
                version_number: 1,
                created_at: now,
            }],
            created_at: now,
            updated_at: now,
        };

        self.files.write().await.insert(file.id.clone(), file.clone());
        tracing::debug!(file_id = %file.id, project_id, "Created content file");

        file
    }

    pub async fn get_by_id(&self, id: &str) -> Option<ContentFile> {
        self.files.read().await.get(id).cloned()
    }

    /// Rename and/or add a version.
    ///
    /// New content is appended as `previous + 1`; without content no version is
    /// added. `updatedAt` is refreshed either way.
    pub async fn update(
        &self,
        id: &str,
        request: UpdateContentFileRequest,
    ) -> Result<ContentFile, AppError> {
        let mut files = self.files.write().await;
        let file = files
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Content file {} not found", id)))?;

        let now = refreshed_at(file.updated_at);

        if let Some(name) = request.name {
            file.name = name;
        }

        if let Some(content) = request.content {
            let next = file
                .latest_version()
                .map(|v| v.version_number + 1)
                .unwrap_or(1);
            file.versions.push(ContentVersion {
                id: new_id(),
                content,
                version_number: next,
                created_at: now,
            });
        }

        file.updated_at = now;
        Ok(file.clone())
    }

    /// Full version history, oldest first. Unknown ids give an empty list.
    pub async fn list_versions(&self, id: &str) -> Vec<ContentVersion> {
        self.files
            .read()
            .await
            .get(id)
            .map(|file| file.versions.clone())
            .unwrap_or_default()
    }

    /// Every file attached to a project, in creation order.
    pub async fn list_for_project(&self, project_id: &str) -> Vec<ContentFile> {
        self.files
            .read()
            .await
            .values()
            .filter(|file| file.project_id == project_id)
            .cloned()
            .collect()
    }

    /// Copy every file of `source_project_id` into `target_project_id`.
    ///
    /// Copies get fresh file and version ids and new timestamps; version
    /// numbers and text are kept.
    pub async fn copy_to_project(
        &self,
        source_project_id: &str,
        target_project_id: &str,
    ) -> Vec<ContentFile> {
        let mut files = self.files.write().await;
        let now = Utc::now();

        let copies: Vec<ContentFile> = files
            .values()
            .filter(|file| file.project_id == source_project_id)
            .map(|file| ContentFile {
                id: new_id(),
                name: file.name.clone(),
                content_type: file.content_type,
                project_id: target_project_id.to_string(),
                versions: file
                    .versions
                    .iter()
                    .map(|v| ContentVersion {
                        id: new_id(),
                        content: v.content.clone(),
                        version_number: v.version_number,
                        created_at: now,
                    })
                    .collect(),
                created_at: now,
                updated_at: now,
            })
            .collect();

        for copy in &copies {
            files.insert(copy.id.clone(), copy.clone());
        }
        tracing::debug!(
            source_project_id,
            target_project_id,
            "Copied {} content files",
            copies.len()
        );

        copies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_starts_at_version_one() {
        let store = ContentStore::new();
        let file = store
            .create("p1", "Intro", ContentType::BlogPost, "Hello")
            .await;

        assert_eq!(file.versions.len(), 1);
        assert_eq!(file.versions[0].version_number, 1);
        assert_eq!(file.versions[0].content, "Hello");
        assert_eq!(file.project_id, "p1");

        let found = store.get_by_id(&file.id).await.unwrap();
        assert_eq!(found, file);
    }

    #[tokio::test]
    async fn test_update_content_appends_version() {
        let store = ContentStore::new();
        let file = store
            .create("p1", "Intro", ContentType::BlogPost, "first")
            .await;

        let updated = store
            .update(
                &file.id,
                UpdateContentFileRequest {
                    name: None,
                    content: Some("second".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Intro");
        assert_eq!(updated.versions.len(), 2);
        assert_eq!(updated.versions[1].version_number, 2);

        let versions = store.list_versions(&file.id).await;
        let contents: Vec<&str> = versions.iter().map(|v| v.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);
        let numbers: Vec<u32> = versions.iter().map(|v| v.version_number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_rename_without_content_adds_no_version() {
        let store = ContentStore::new();
        let file = store
            .create("p1", "Draft", ContentType::PressRelease, "text")
            .await;

        let updated = store
            .update(
                &file.id,
                UpdateContentFileRequest {
                    name: Some("Final".to_string()),
                    content: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Final");
        assert_eq!(updated.versions.len(), 1);
        assert!(updated.updated_at >= file.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = ContentStore::new();
        let result = store
            .update("missing", UpdateContentFileRequest::default())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_versions_of_unknown_file_are_empty() {
        let store = ContentStore::new();
        assert!(store.list_versions("missing").await.is_empty());
    }

    #[tokio::test]
    async fn test_list_for_project() {
        let store = ContentStore::new();
        let a = store.create("p1", "a", ContentType::BlogPost, "").await;
        store.create("p2", "b", ContentType::BlogPost, "").await;
        let c = store.create("p1", "c", ContentType::SocialMedia, "").await;

        let files = store.list_for_project("p1").await;
        let ids: Vec<&str> = files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec![a.id.as_str(), c.id.as_str()]);
    }

    #[tokio::test]
    async fn test_copy_to_project_keeps_history_under_new_ids() {
        let store = ContentStore::new();
        let file = store.create("p1", "Intro", ContentType::BlogPost, "v1").await;
        store
            .update(
                &file.id,
                UpdateContentFileRequest {
                    name: None,
                    content: Some("v2".to_string()),
                },
            )
            .await
            .unwrap();
        store.create("other", "x", ContentType::BlogPost, "").await;

        let copies = store.copy_to_project("p1", "p2").await;

        assert_eq!(copies.len(), 1);
        let copy = &copies[0];
        assert_ne!(copy.id, file.id);
        assert_eq!(copy.project_id, "p2");
        assert_eq!(copy.name, "Intro");
        let numbers: Vec<u32> = copy.versions.iter().map(|v| v.version_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(copy.versions[1].content, "v2");
        assert!(copy.versions.iter().all(|v| v.id != file.versions[0].id));

        assert_eq!(store.list_for_project("p2").await, copies);
        assert_eq!(store.list_for_project("p1").await.len(), 1);
    }
}
