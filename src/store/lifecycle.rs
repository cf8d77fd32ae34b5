//! Status transitions, duplication and bulk operations on projects.
//!
//! Everything here goes through [`ProjectStore::update`] or
//! [`ProjectStore::create`], so `updatedAt` refresh and `NotFound` behave the
//! same as for a plain update.

use super::ProjectStore;
use crate::errors::AppError;
use crate::models::{CreateProjectRequest, Project, ProjectStatus, UpdateProjectRequest};

impl ProjectStore {
    /// Mark a project as deleted. Same transition as [`Self::archive`].
    pub async fn soft_delete(&self, id: &str) -> Result<Project, AppError> {
        self.set_status(id, ProjectStatus::Archived).await
    }

    pub async fn archive(&self, id: &str) -> Result<Project, AppError> {
        self.set_status(id, ProjectStatus::Archived).await
    }

    /// Reopen a project. The status before archiving is not remembered.
    pub async fn unarchive(&self, id: &str) -> Result<Project, AppError> {
        self.set_status(id, ProjectStatus::InProgress).await
    }

    /// Copy a project under a new id as `"Copy of <name>"`, back at `NOT_STARTED`.
    ///
    /// Only the project record is copied; its content files live in the
    /// [`ContentStore`](super::ContentStore) and are copied there.
    pub async fn duplicate(&self, id: &str) -> Result<Project, AppError> {
        let source = self
            .find_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))?;

        let copy = CreateProjectRequest {
            name: format!("Copy of {}", source.name),
            description: source.description,
            tags: source.tags,
            collaborators: source.collaborators,
        };

        Ok(self.create(copy).await)
    }

    /// Set `status` on each id independently.
    ///
    /// Ids that do not resolve are skipped without error; the result holds only
    /// the updated projects, in input order.
    pub async fn bulk_update_status(&self, ids: &[String], status: ProjectStatus) -> Vec<Project> {
        let mut updated = Vec::with_capacity(ids.len());
        for id in ids {
            match self.set_status(id, status).await {
                Ok(project) => updated.push(project),
                Err(e) => tracing::debug!("Skipping {} in bulk status update: {}", id, e),
            }
        }
        updated
    }

    /// Soft-delete each id independently, with the same skip policy as
    /// [`Self::bulk_update_status`].
    pub async fn bulk_delete(&self, ids: &[String]) -> Vec<Project> {
        let mut deleted = Vec::with_capacity(ids.len());
        for id in ids {
            match self.soft_delete(id).await {
                Ok(project) => deleted.push(project),
                Err(e) => tracing::debug!("Skipping {} in bulk delete: {}", id, e),
            }
        }
        deleted
    }

    async fn set_status(&self, id: &str, status: ProjectStatus) -> Result<Project, AppError> {
        self.update(id, UpdateProjectRequest::status(status)).await
    }
}
