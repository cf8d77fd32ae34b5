//! Content file API endpoints.

use axum::extract::{Path, State};

use super::{created, ok, require, ApiResult, AppJson};
use crate::errors::AppError;
use crate::models::{
    ContentFile, ContentVersion, CreateContentFileRequest, UpdateContentFileRequest,
};
use crate::AppState;

/// POST /api/content - Create a content file in an existing project.
pub async fn create_content(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateContentFileRequest>,
) -> ApiResult<ContentFile> {
    require(&request.name, "Content file name is required")?;

    if state.projects.find_by_id(&request.project_id).await.is_none() {
        return Err(AppError::NotFound(format!(
            "Project {} not found",
            request.project_id
        )));
    }

    let file = state
        .content
        .create(
            &request.project_id,
            &request.name,
            request.content_type,
            &request.content,
        )
        .await;
    created(file)
}

/// GET /api/content/:id
pub async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ContentFile> {
    match state.content.get_by_id(&id).await {
        Some(file) => ok(file),
        None => Err(AppError::NotFound(format!("Content file {} not found", id))),
    }
}

/// PUT /api/content/:id - Rename and/or append a new version.
pub async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateContentFileRequest>,
) -> ApiResult<ContentFile> {
    ok(state.content.update(&id, request).await?)
}

/// GET /api/content/:id/versions - Version history; empty for unknown ids.
pub async fn list_content_versions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<ContentVersion>> {
    ok(state.content.list_versions(&id).await)
}
