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
    models::{CommentResponse, UserProfile, UserRegister, UserResponse, UserUpdate},
};

pub async fn create(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<UserRegister>,
) -> AppResult<(StatusCode, Json<Uuid>)> {
    let id = state.users.create(req).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<UserResponse>>> {
    Ok(Json(state.users.get_all().await?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<UserResponse>> {
    Ok(Json(state.users.get(id).await?))
}

pub async fn me(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> AppResult<Json<UserProfile>> {
    Ok(Json(state.users.get_profile(session.user_id()?).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    _session: Session,
    AppPath(id): AppPath<Uuid>,
    AppJson(patch): AppJson<UserUpdate>,
) -> AppResult<Json<UserResponse>> {
    Ok(Json(state.users.update(id, patch).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    _session: Session,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<bool>> {
    Ok(Json(state.users.delete(id).await?))
}

pub async fn comments(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<Vec<CommentResponse>>> {
    Ok(Json(state.comments.get_all_by_user(id).await?))
}
