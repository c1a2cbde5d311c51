use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRequestParts, State},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use cookie::{Cookie, SameSite};
use serde_json::{Value, json};
use uuid::Uuid;

use super::extract::AppJson;
use crate::{
    AppState,
    config::Config,
    error::{AppError, AppResult},
    models::UserCredentials,
};

/// Proof that the request carries a session cookie. Only `user_id` looks at
/// the value; routes that merely need the cookie present ignore it.
#[derive(Debug)]
pub struct Session {
    value: String,
}

impl Session {
    pub fn user_id(&self) -> AppResult<Uuid> {
        self.value.parse().map_err(|_| AppError::Unauthorized)
    }
}

impl FromRequestParts<Arc<AppState>> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar.get(&state.config.session_cookie).ok_or(AppError::Unauthorized)?;
        Ok(Self { value: cookie.value().to_string() })
    }
}

fn session_cookie(config: &Config, value: String, max_age: time::Duration) -> Cookie<'static> {
    Cookie::build((config.session_cookie.clone(), value))
        .http_only(true)
        .secure(config.secure_cookies)
        .path("/")
        .max_age(max_age)
        .same_site(SameSite::Lax)
        .build()
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    AppJson(creds): AppJson<UserCredentials>,
) -> AppResult<(CookieJar, Json<Value>)> {
    let user_id = state.users.authenticate(creds).await?;
    let ttl = time::Duration::seconds(state.config.session_ttl_secs);
    tracing::info!(user_id = %user_id, "session issued");
    Ok((jar.add(session_cookie(&state.config, user_id.to_string(), ttl)), Json(json!({}))))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Json<Value>) {
    let cleared = session_cookie(&state.config, String::new(), time::Duration::ZERO);
    (jar.add(cleared), Json(json!({ "message": "Logged out" })))
}
