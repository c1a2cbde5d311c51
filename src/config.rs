use std::net::SocketAddr;

use anyhow::Context;
use axum::http::HeaderValue;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub cors_origin: HeaderValue,
    pub session_cookie: String,
    pub session_ttl_secs: i64,
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://cinemovie.db?mode=rwc".to_string());

        let cors_origin: HeaderValue = std::env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .parse()
            .context("CORS_ORIGIN")?;

        let session_cookie =
            std::env::var("SESSION_COOKIE").unwrap_or_else(|_| "jwt".to_string());

        let session_ttl_secs: i64 = std::env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .context("SESSION_TTL_SECS")?;

        let secure_cookies: bool = std::env::var("SECURE_COOKIES")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .context("SECURE_COOKIES")?;

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            cors_origin,
            session_cookie,
            session_ttl_secs,
            secure_cookies,
        })
    }
}
