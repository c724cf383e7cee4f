use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use storybook_core::{Character, CharacterUpdate, NewCharacter};

use crate::api_error::ApiError;
use crate::AppState;

pub async fn list_characters(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<Character>>, ApiError> {
    Ok(Json(state.project_service.list_characters(&project_id).await?))
}

pub async fn create_character(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
    Json(input): Json<NewCharacter>,
) -> Result<(StatusCode, Json<Character>), ApiError> {
    let character = state.project_service.create_character(&project_id, input).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Character>, ApiError> {
    Ok(Json(state.project_service.get_character(&id).await?))
}

pub async fn update_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<CharacterUpdate>,
) -> Result<Json<Character>, ApiError> {
    Ok(Json(state.project_service.update_character(&id, update).await?))
}

pub async fn delete_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.project_service.delete_character(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
