use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use storybook_core::{NewPage, Page, PageUpdate};

use crate::api_error::ApiError;
use crate::AppState;

pub async fn list_pages(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<Page>>, ApiError> {
    Ok(Json(state.project_service.list_pages(&project_id).await?))
}

pub async fn create_page(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
    Json(input): Json<NewPage>,
) -> Result<(StatusCode, Json<Page>), ApiError> {
    let page = state.project_service.create_page(&project_id, input).await?;
    Ok((StatusCode::CREATED, Json(page)))
}

pub async fn get_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Page>, ApiError> {
    Ok(Json(state.project_service.get_page(&id).await?))
}

pub async fn update_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<PageUpdate>,
) -> Result<Json<Page>, ApiError> {
    Ok(Json(state.project_service.update_page(&id, update).await?))
}

pub async fn delete_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.project_service.delete_page(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
