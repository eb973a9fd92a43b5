use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::{news::FetchError, store::StoreError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("User registration failed")]
    DuplicateUser,

    #[error("User registration failed: {0}")]
    RegistrationFailed(#[source] StoreError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No token provided")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("provider request failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::DuplicateUser
            | AppError::RegistrationFailed(_)
            | AppError::InvalidCredentials
            | AppError::InvalidToken => StatusCode::BAD_REQUEST,
            AppError::MissingToken => StatusCode::UNAUTHORIZED,
            AppError::Fetch(_) | AppError::Store(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            AppError::DuplicateUser | AppError::RegistrationFailed(_) => {
                tracing::warn!(error = %self, "registration rejected");
                "User registration failed".to_string()
            }
            AppError::Fetch(_) | AppError::Store(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                "Internal server error".to_string()
            }
            _ => {
                tracing::warn!(error = %self, "request rejected");
                self.to_string()
            }
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure of an article endpoint, rendered as `{message, error}`.
#[derive(Debug)]
pub struct ArticleFailure {
    pub message: &'static str,
    pub error: AppError,
}

impl ArticleFailure {
    pub fn fetching(error: AppError) -> Self {
        Self {
            message: "Error fetching articles",
            error,
        }
    }

    pub fn retrieving(error: AppError) -> Self {
        Self {
            message: "Error retrieving articles",
            error,
        }
    }
}

impl IntoResponse for ArticleFailure {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.error, "{}", self.message);
        let body = json!({
            "message": self.message,
            "error": self.error.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
