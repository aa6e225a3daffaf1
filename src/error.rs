//! Error types shared by both services
//!
//! `StoreError` covers everything that can go wrong while talking to the
//! embedded database. `AppError` is what handlers return; it knows how to
//! turn itself into an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure inside the storage accessor
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] redb::DatabaseError),

    #[error(transparent)]
    Transaction(#[from] redb::TransactionError),

    #[error(transparent)]
    Table(#[from] redb::TableError),

    #[error(transparent)]
    Storage(#[from] redb::StorageError),

    #[error(transparent)]
    Commit(#[from] redb::CommitError),

    #[error("corrupt record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("cannot prepare database location: {0}")]
    Io(#[from] std::io::Error),
}

/// Error returned from request handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested identifier does not exist
    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::Store(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::NotFound(message) => message.to_string(),
            AppError::Store(err) => {
                // Storage details stay in the log, never in the response body
                tracing::error!(error = %err, "storage operation failed");
                "Internal server error".to_string()
            }
        };

        (
            self.status(),
            Json(json!({
                "error": message,
                "code": self.code()
            })),
        )
            .into_response()
    }
}
