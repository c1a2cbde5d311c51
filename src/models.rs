//! Request and response projections exchanged at the HTTP boundary.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegister {
    pub email: String,
    pub password: String,
    pub login: String,
    pub name: String,
    #[serde(default)]
    pub state: bool,
}

/// Patch for a user: absent fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub login: Option<String>,
    pub password: Option<String>,
    pub user_name: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserCredentials {
    pub login: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: Uuid,
    pub user_name: String,
    pub login: String,
    pub state: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: Uuid,
    pub user_name: String,
    pub email: String,
    pub login: String,
    pub state: bool,
}

/// Full set of editable title fields, used for both create and replace.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleUpsert {
    #[serde(rename = "titleName")]
    pub name: String,
    pub overview: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default, rename = "director")]
    pub directors: Vec<String>,
    pub release_year: Option<i16>,
    pub rating: Option<i16>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleResponse {
    pub id: Uuid,
    pub tmdb_id: String,
    #[serde(rename = "titleName")]
    pub name: String,
    pub overview: Option<String>,
    pub keywords: Vec<String>,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    #[serde(rename = "director")]
    pub directors: Vec<String>,
    pub release_year: Option<i16>,
    pub rating: Option<i16>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreate {
    pub user_id: Uuid,
    pub title_id: Uuid,
    pub rating: i32,
    pub info: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CommentUpdate {
    pub rating: i32,
    pub info: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title_id: Uuid,
    pub creation_date: Timestamp,
    pub rating: i16,
    pub info: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavCreate {
    pub title_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavResponse {
    pub fav_id: Uuid,
    pub title_id: Uuid,
    pub user_id: Uuid,
}
