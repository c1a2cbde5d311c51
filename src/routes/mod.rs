mod comments;
mod extract;
mod favourites;
mod session;
mod titles;
mod users;


use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.config.cors_origin.clone())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/users", post(users::create).get(users::list))
        .route("/users/login", post(session::login))
        .route("/users/logout", post(session::logout))
        .route("/users/me", get(users::me))
        .route("/users/{id}", get(users::get).put(users::update).delete(users::delete))
        .route("/users/{id}/comments", get(users::comments))
        .route("/titles", post(titles::create).get(titles::list))
        .route("/titles/{id}", get(titles::get).put(titles::update).delete(titles::delete))
        .route("/titles/{id}/comments", get(titles::comments))
        .route("/comments", post(comments::create).get(comments::list))
        .route(
            "/comments/{id}",
            get(comments::get).put(comments::update).delete(comments::delete),
        )
        .route("/favs", post(favourites::create).get(favourites::list))
        .route("/favs/{id}", get(favourites::by_user).delete(favourites::delete))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
