use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use uuid::Uuid;

use super::{
    extract::{AppJson, AppPath},
    session::Session,
};
use crate::{
    AppState,
    error::AppResult,
    models::{CommentCreate, CommentResponse, CommentUpdate},
};

pub async fn create(
    State(state): State<Arc<AppState>>,
    _session: Session,
    AppJson(req): AppJson<CommentCreate>,
) -> AppResult<(StatusCode, Json<Uuid>)> {
    let id = state.comments.create(req).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<CommentResponse>>> {
    Ok(Json(state.comments.get_all().await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<CommentResponse>> {
    Ok(Json(state.comments.get(id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    _session: Session,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<CommentUpdate>,
) -> AppResult<Json<CommentResponse>> {
    Ok(Json(state.comments.update(id, req).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    _session: Session,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<bool>> {
    Ok(Json(state.comments.delete(id).await?))
}
