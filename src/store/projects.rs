//! Project store: identity, timestamps and partial updates.

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::{new_id, query_projects, refreshed_at};
use crate::errors::AppError;
use crate::models::{
    CreateProjectRequest, Project, ProjectPage, ProjectQuery, ProjectStatus, UpdateProjectRequest,
};

/// Authoritative in-memory set of projects, kept in creation order.
#[derive(Default)]
pub struct ProjectStore {
    projects: RwLock<IndexMap<String, Project>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new project with a fresh id and `NOT_STARTED` status.
    pub async fn create(&self, request: CreateProjectRequest) -> Project {
        let id = new_id();
        let now = Utc::now();

        let project = Project {
            id: id.clone(),
            name: request.name,
            description: request.description,
            status: ProjectStatus::NotStarted,
            tags: request.tags,
            collaborators: request.collaborators,
            content_files: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        self.projects.write().await.insert(id, project.clone());
        tracing::debug!(project_id = %project.id, "Created project");

        project
    }

    /// Get a project by ID.
    pub async fn find_by_id(&self, id: &str) -> Option<Project> {
        self.projects.read().await.get(id).cloned()
    }

    /// Merge a patch onto an existing project and refresh `updatedAt`.
    pub async fn update(
        &self,
        id: &str,
        request: UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        let mut projects = self.projects.write().await;
        let project = projects
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))?;

        if let Some(name) = request.name {
            project.name = name;
        }
        if let Some(description) = request.description {
            project.description = description;
        }
        if let Some(status) = request.status {
            project.status = status;
        }
        if let Some(tags) = request.tags {
            project.tags = tags;
        }
        if let Some(collaborators) = request.collaborators {
            project.collaborators = collaborators;
        }
        project.updated_at = refreshed_at(project.updated_at);

        Ok(project.clone())
    }

    /// Filter, sort and paginate without mutating the store.
    pub async fn list(&self, query: &ProjectQuery) -> ProjectPage {
        let projects = self.projects.read().await;
        let snapshot: Vec<&Project> = projects.values().collect();
        query_projects(snapshot, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> CreateProjectRequest {
        CreateProjectRequest {
            name: name.to_string(),
            description: format!("{} description", name),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_defaults() {
        let store = ProjectStore::new();
        let project = store.create(named("Launch")).await;

        assert!(!project.id.is_empty());
        assert_eq!(project.status, ProjectStatus::NotStarted);
        assert!(project.tags.is_empty());
        assert!(project.collaborators.is_empty());
        assert!(project.content_files.is_empty());
        assert_eq!(project.created_at, project.updated_at);
    }

    #[tokio::test]
    async fn test_create_then_find_round_trips() {
        let store = ProjectStore::new();
        let created = store.create(named("Launch")).await;
        let found = store.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = ProjectStore::new();
        let a = store.create(named("A")).await;
        let b = store.create(named("A")).await;
        assert_ne!(a.id, b.id);
        assert_eq!(store.list(&ProjectQuery::default()).await.total, 2);
    }

    #[tokio::test]
    async fn test_update_merges_and_refreshes() {
        let store = ProjectStore::new();
        let created = store.create(named("Launch")).await;

        let updated = store
            .update(
                &created.id,
                UpdateProjectRequest {
                    tags: Some(vec!["q3".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Launch");
        assert_eq!(updated.tags, vec!["q3".to_string()]);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = ProjectStore::new();
        let result = store
            .update("missing", UpdateProjectRequest::status(ProjectStatus::Completed))
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
