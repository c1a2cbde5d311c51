use std::fmt;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde_json::json;
use thiserror::Error;

/// The record kinds a lookup can fail to resolve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityKind {
    User,
    Title,
    Comment,
    Favourite,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::User => "User",
            EntityKind::Title => "Title",
            EntityKind::Comment => "Comment",
            EntityKind::Favourite => "Favourite",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{kind} with id {id} is not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("authentication required")]
    Unauthorized,

    #[error("database error: {0}")]
    Database(DbErr),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(kind: EntityKind, id: impl fmt::Display) -> Self {
        Self::NotFound { kind, id: id.to_string() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to clients. Server-side failures are not described.
    fn public_message(&self) -> String {
        match self {
            AppError::Database(_) | AppError::Internal(_) => "internal error".to_string(),
            _ => self.to_string(),
        }
    }
}

pub(crate) const LOGIN_TAKEN: &str = "User with the following login already exists";
pub(crate) const EMAIL_TAKEN: &str = "User with the following email already exists";
const TMDB_ID_TAKEN: &str = "Title with the following tmdb id already exists";
const ALREADY_EXISTS: &str = "Record already exists";
const BROKEN_REFERENCE: &str = "Record is referenced by other records or references a missing one";

fn unique_violation_message(detail: &str) -> &'static str {
    if detail.contains("users.login") {
        LOGIN_TAKEN
    } else if detail.contains("users.email") {
        EMAIL_TAKEN
    } else if detail.contains("titles.tmdb_id") {
        TMDB_ID_TAKEN
    } else {
        ALREADY_EXISTS
    }
}

// Constraint violations reported by the store surface as conflicts; they
// back up the check-then-write races in the services.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!(%detail, "unique constraint violated");
                AppError::Conflict(unique_violation_message(&detail).to_string())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                tracing::debug!(%detail, "foreign key constraint violated");
                AppError::Conflict(BROKEN_REFERENCE.to_string())
            }
            _ => AppError::Database(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl From<jiff::Error> for AppError {
    fn from(err: jiff::Error) -> Self {
        Self::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Database(e) => tracing::error!(error = %e, "database error"),
            AppError::Internal(e) => tracing::error!(error = %e, "internal error"),
            _ => tracing::debug!(status = status.as_u16(), error = %self, "request rejected"),
        }

        let body = Json(json!({
            "error": self.public_message(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
