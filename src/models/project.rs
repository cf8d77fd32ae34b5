//! Project model and the request bodies that create, patch and list projects.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ContentFile;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "NOT_STARTED",
            ProjectStatus::InProgress => "IN_PROGRESS",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::Archived => "ARCHIVED",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_STARTED" => Ok(ProjectStatus::NotStarted),
            "IN_PROGRESS" => Ok(ProjectStatus::InProgress),
            "COMPLETED" => Ok(ProjectStatus::Completed),
            "ARCHIVED" => Ok(ProjectStatus::Archived),
            other => Err(format!("Unknown project status: {}", other)),
        }
    }
}

/// A user-created container grouping content files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub tags: Vec<String>,
    pub collaborators: Vec<String>,
    /// Filled from the content store when the project is served; never written by clients.
    #[serde(default)]
    pub content_files: Vec<ContentFile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a new project.
///
/// Identity, timestamps and status are always assigned by the store. Content
/// files are added through the content endpoints, not through the project body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub collaborators: Vec<String>,
}

/// Partial update of a project. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub collaborators: Option<Vec<String>>,
}

impl UpdateProjectRequest {
    /// Patch that only changes the status.
    pub fn status(status: ProjectStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

/// Sort direction for project listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

/// Project fields with a natural ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Resolve a camelCase field name. Fields without a natural ordering yield `None`.
    pub fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(SortField::Id),
            "name" => Some(SortField::Name),
            "description" => Some(SortField::Description),
            "status" => Some(SortField::Status),
            "createdAt" => Some(SortField::CreatedAt),
            "updatedAt" => Some(SortField::UpdatedAt),
            _ => None,
        }
    }
}

/// Listing request understood by the query engine.
#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    /// Raw field name; unknown names leave the order unchanged.
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub status: Option<ProjectStatus>,
    pub tags: Vec<String>,
}

/// One page of a project listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    pub projects: Vec<Project>,
    /// Count after filtering, before pagination.
    pub total: usize,
}

/// Request body for bulk status updates.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkUpdateStatusRequest {
    pub ids: Vec<String>,
    pub status: ProjectStatus,
}

/// Request body for bulk deletion.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}
