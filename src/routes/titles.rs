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
    models::{CommentResponse, TitleResponse, TitleUpsert},
};

pub async fn create(
    State(state): State<Arc<AppState>>,
    _session: Session,
    AppJson(req): AppJson<TitleUpsert>,
) -> AppResult<(StatusCode, Json<Uuid>)> {
    let id = state.titles.create(req).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<TitleResponse>>> {
    Ok(Json(state.titles.get_all().await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<TitleResponse>> {
    Ok(Json(state.titles.get(id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    _session: Session,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<TitleUpsert>,
) -> AppResult<Json<TitleResponse>> {
    Ok(Json(state.titles.update(id, req).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    _session: Session,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<bool>> {
    Ok(Json(state.titles.delete(id).await?))
}

pub async fn comments(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<Vec<CommentResponse>>> {
    Ok(Json(state.comments.get_all_by_title(id).await?))
}
