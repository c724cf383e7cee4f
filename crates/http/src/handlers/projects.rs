use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use storybook_core::{CountSummary, NewProject, Project, ProjectOverview, ProjectUpdate};

use crate::api_error::ApiError;
use crate::AppState;

/// `/admin` landing data: every project with its counts.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProjectOverview>>, ApiError> {
    Ok(Json(state.project_service.overview().await?))
}

pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(state.project_service.list_projects().await?))
}

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewProject>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = state.project_service.create_project(input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(state.project_service.get_project(&id).await?))
}

pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<ProjectUpdate>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(state.project_service.update_project(&id, update).await?))
}

pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.project_service.delete_project(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn project_summary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CountSummary>, ApiError> {
    Ok(Json(state.project_service.summary(&id).await?))
}
