//! Project API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use super::{created, ok, require, ApiResult, AppJson, AppQuery};
use crate::errors::AppError;
use crate::models::{
    BulkDeleteRequest, BulkUpdateStatusRequest, ContentFile, CreateProjectRequest, Project,
    ProjectPage, ProjectQuery, ProjectStatus, SortOrder, UpdateProjectRequest,
};
use crate::AppState;

/// Query parameters for listing projects.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsParams {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Comma-separated tag list
    #[serde(default)]
    pub tags: Option<String>,
}

impl TryFrom<ListProjectsParams> for ProjectQuery {
    type Error = AppError;

    fn try_from(params: ListProjectsParams) -> Result<Self, Self::Error> {
        let sort_order = params
            .sort_order
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<SortOrder>())
            .transpose()
            .map_err(AppError::Validation)?;
        let status = params
            .status
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<ProjectStatus>())
            .transpose()
            .map_err(AppError::Validation)?;
        let tags = params
            .tags
            .map(|csv| {
                csv.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(ProjectQuery {
            page: params.page,
            limit: params.limit,
            sort_by: params.sort_by.filter(|s| !s.is_empty()),
            sort_order,
            status,
            tags,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateStatusResponse {
    pub updated_projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteResponse {
    pub deleted_projects: Vec<Project>,
}

/// POST /api/projects - Create a new project.
pub async fn create_project(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateProjectRequest>,
) -> ApiResult<Project> {
    require(&request.name, "Project name is required")?;
    let project = state.projects.create(request).await;
    created(with_content(&state, project).await)
}

/// GET /api/projects - Filtered, sorted, paginated listing.
pub async fn list_projects(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListProjectsParams>,
) -> ApiResult<ProjectPage> {
    let query = ProjectQuery::try_from(params)?;
    let page = state.projects.list(&query).await;
    ok(ProjectPage {
        projects: with_content_all(&state, page.projects).await,
        total: page.total,
    })
}

/// GET /api/projects/:id - Get a single project.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Project> {
    match state.projects.find_by_id(&id).await {
        Some(project) => ok(with_content(&state, project).await),
        None => Err(AppError::NotFound(format!("Project {} not found", id))),
    }
}

/// PUT /api/projects/:id - Partially update a project.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateProjectRequest>,
) -> ApiResult<Project> {
    let project = state.projects.update(&id, request).await?;
    ok(with_content(&state, project).await)
}

/// DELETE /api/projects/:id - Soft delete (the project is archived, not removed).
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.projects.soft_delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/projects/:id/archive
pub async fn archive_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Project> {
    let project = state.projects.archive(&id).await?;
    ok(with_content(&state, project).await)
}

/// POST /api/projects/:id/unarchive
pub async fn unarchive_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Project> {
    let project = state.projects.unarchive(&id).await?;
    ok(with_content(&state, project).await)
}

/// POST /api/projects/:id/duplicate - Copy the project and its content files.
pub async fn duplicate_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Project> {
    let copy = state.projects.duplicate(&id).await?;
    state.content.copy_to_project(&id, &copy.id).await;
    created(with_content(&state, copy).await)
}

/// POST /api/projects/bulk-update-status - Unknown ids are skipped.
pub async fn bulk_update_status(
    State(state): State<AppState>,
    AppJson(request): AppJson<BulkUpdateStatusRequest>,
) -> ApiResult<BulkUpdateStatusResponse> {
    let updated_projects = state
        .projects
        .bulk_update_status(&request.ids, request.status)
        .await;
    tracing::info!(
        "Bulk status update to {}: {} of {} projects updated",
        request.status.as_str(),
        updated_projects.len(),
        request.ids.len()
    );
    ok(BulkUpdateStatusResponse {
        updated_projects: with_content_all(&state, updated_projects).await,
    })
}

/// POST /api/projects/bulk-delete - Unknown ids are skipped.
pub async fn bulk_delete_projects(
    State(state): State<AppState>,
    AppJson(request): AppJson<BulkDeleteRequest>,
) -> ApiResult<BulkDeleteResponse> {
    let deleted_projects = state.projects.bulk_delete(&request.ids).await;
    tracing::info!(
        "Bulk delete: {} of {} projects archived",
        deleted_projects.len(),
        request.ids.len()
    );
    ok(BulkDeleteResponse {
        deleted_projects: with_content_all(&state, deleted_projects).await,
    })
}

/// GET /api/projects/:id/content - Content files attached to a project.
pub async fn list_project_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<ContentFile>> {
    ok(state.content.list_for_project(&id).await)
}

/// Fill `contentFiles` from the content store.
async fn with_content(state: &AppState, mut project: Project) -> Project {
    project.content_files = state.content.list_for_project(&project.id).await;
    project
}

async fn with_content_all(state: &AppState, projects: Vec<Project>) -> Vec<Project> {
    let mut filled = Vec::with_capacity(projects.len());
    for project in projects {
        filled.push(with_content(state, project).await);
    }
    filled
}
