mod config;
mod db;
mod entities;
mod error;
mod models;
mod repos;
mod routes;
mod services;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    repos::{SeaCommentRepo, SeaFavouriteRepo, SeaTitleRepo, SeaUserRepo},
    services::{CommentService, FavouriteService, TitleService, UserService},
};

pub struct AppState {
    pub config: Arc<Config>,
    pub users: UserService,
    pub titles: TitleService,
    pub comments: CommentService,
    pub favourites: FavouriteService,
}

impl AppState {
    pub fn new(config: Arc<Config>, db: DatabaseConnection) -> Self {
        let users = Arc::new(SeaUserRepo::new(db.clone()));
        let titles = Arc::new(SeaTitleRepo::new(db.clone()));
        let comments = Arc::new(SeaCommentRepo::new(db.clone()));
        let favourites = Arc::new(SeaFavouriteRepo::new(db));

        Self {
            config,
            users: UserService::new(users.clone()),
            titles: TitleService::new(titles.clone()),
            comments: CommentService::new(comments, users.clone(), titles.clone()),
            favourites: FavouriteService::new(favourites, users, titles),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,cinemovie=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = db::connect_and_migrate(config.database_url.as_str()).await?;
    let state = Arc::new(AppState::new(config.clone(), db));

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
