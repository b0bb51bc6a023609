use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Query string that does not deserialize. Pagination input is clamped
    /// instead and never lands here.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid category hierarchy: {0}")]
    InvalidHierarchy(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Database,
    NotFound,
    InvalidPath,
    Validation,
    InvalidHierarchy,
}

/// Status code for every error kind, consulted once in `into_response`
const STATUS_TABLE: &[(ErrorKind, StatusCode)] = &[
    (ErrorKind::Database, StatusCode::INTERNAL_SERVER_ERROR),
    (ErrorKind::NotFound, StatusCode::NOT_FOUND),
    (ErrorKind::InvalidPath, StatusCode::NOT_FOUND),
    (ErrorKind::Validation, StatusCode::BAD_REQUEST),
    (ErrorKind::InvalidHierarchy, StatusCode::INTERNAL_SERVER_ERROR),
];

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        STATUS_TABLE
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, status)| *status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Database(_) => ErrorKind::Database,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::InvalidPath(_) => ErrorKind::InvalidPath,
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::InvalidHierarchy(_) => ErrorKind::InvalidHierarchy,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.kind().status_code();

        let message = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error occurred".to_string()
            }
            AppError::InvalidHierarchy(ref msg) => {
                tracing::error!("Invalid category hierarchy: {}", msg);
                "Category hierarchy is inconsistent".to_string()
            }
            AppError::NotFound(msg) | AppError::InvalidPath(msg) | AppError::Validation(msg) => msg,
        };

        let body = Json(ErrorResponse {
            status_code: status.as_u16(),
            message,
            error: status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table_covers_taxonomy() {
        assert_eq!(ErrorKind::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::InvalidPath.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::Validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorKind::Database.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorKind::InvalidHierarchy.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::InvalidPath("empty path".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::Validation("limit out of range".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
