use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use uuid::Uuid;

use super::extract::{AppJson, AppPath};
use crate::{
    AppState,
    error::AppResult,
    models::{FavCreate, FavResponse},
};

pub async fn create(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<FavCreate>,
) -> AppResult<(StatusCode, Json<Uuid>)> {
    let id = state.favourites.create(req).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<FavResponse>>> {
    Ok(Json(state.favourites.get_all().await?))
}

pub async fn by_user(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<Uuid>,
) -> AppResult<Json<Vec<FavResponse>>> {
    Ok(Json(state.favourites.get_all_by_user(user_id).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    AppPath(fav_id): AppPath<Uuid>,
) -> AppResult<Json<bool>> {
    Ok(Json(state.favourites.delete(fav_id).await?))
}
