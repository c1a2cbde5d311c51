//! Storage collaborators, one per entity.
//!
//! Services only see these traits; the SeaORM-backed implementations live in
//! the submodules and are wired together in `AppState::new`.

mod comments;
mod favourites;
mod titles;
mod users;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use uuid::Uuid;

pub use comments::SeaCommentRepo;
pub use favourites::SeaFavouriteRepo;
pub use titles::SeaTitleRepo;
pub use users::SeaUserRepo;

use crate::{
    entities::{comment, favourite_title, title, user},
    error::AppResult,
};

/// A user not yet persisted; the repository assigns its id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub state: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTitle {
    pub tmdb_id: String,
    pub name: String,
    pub overview: Option<String>,
    pub keywords: Vec<String>,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
    pub release_year: Option<i16>,
    pub rating: Option<i16>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewComment {
    pub user_id: Uuid,
    pub title_id: Uuid,
    pub rating: i16,
    pub info: Option<String>,
    pub created_at: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewFavourite {
    pub user_id: Uuid,
    pub title_id: Uuid,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<user::Model>>;

    async fn find_all(&self) -> AppResult<Vec<user::Model>>;

    async fn find_by_login(&self, login: &str) -> AppResult<Option<user::Model>>;

    async fn exists_by_login(&self, login: &str) -> AppResult<bool>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Insert a new user and return it with its generated id.
    async fn create(&self, user: NewUser) -> AppResult<user::Model>;

    /// Overwrite every column of an existing user.
    async fn save(&self, user: user::Model) -> AppResult<user::Model>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TitleRepo: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<title::Model>>;

    async fn find_all(&self) -> AppResult<Vec<title::Model>>;

    async fn exists_by_tmdb_id(&self, tmdb_id: &str) -> AppResult<bool>;

    async fn create(&self, title: NewTitle) -> AppResult<title::Model>;

    async fn save(&self, title: title::Model) -> AppResult<title::Model>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepo: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<comment::Model>>;

    async fn find_all(&self) -> AppResult<Vec<comment::Model>>;

    async fn find_all_by_user(&self, user_id: Uuid) -> AppResult<Vec<comment::Model>>;

    async fn find_all_by_title(&self, title_id: Uuid) -> AppResult<Vec<comment::Model>>;

    async fn create(&self, comment: NewComment) -> AppResult<comment::Model>;

    async fn save(&self, comment: comment::Model) -> AppResult<comment::Model>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavouriteRepo: Send + Sync {
    async fn exists_by_id(&self, id: Uuid) -> AppResult<bool>;

    async fn find_all(&self) -> AppResult<Vec<favourite_title::Model>>;

    async fn find_all_by_user(&self, user_id: Uuid) -> AppResult<Vec<favourite_title::Model>>;

    async fn create(&self, favourite: NewFavourite) -> AppResult<favourite_title::Model>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}
