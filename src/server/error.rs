use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::quiz::QuizError;

/// Every failure a handler can report. Each one renders as the fixed
/// `{success: false, error, message}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("unprossable")]
    Unprocessable,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("store operation failed: {0}")]
    Store(#[from] sqlx::Error),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable | ApiError::Store(_) | ApiError::Quiz(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self.status() {
            StatusCode::NOT_FOUND => "resource not found",
            StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
            // the misspelling is part of the wire format
            _ => "unprossable",
        }
    }

    /// Collapses any failure into `Unprocessable`, logging what was swallowed.
    pub fn into_unprocessable(self) -> ApiError {
        match self {
            ApiError::Unprocessable => self,
            other => {
                tracing::warn!(error = %other, "Reporting failure as unprocessable");
                ApiError::Unprocessable
            }
        }
    }

    /// Collapses any failure into `NotFound`, logging what was swallowed.
    pub fn into_not_found(self) -> ApiError {
        match self {
            ApiError::NotFound => self,
            other => {
                tracing::warn!(error = %other, "Reporting failure as not found");
                ApiError::NotFound
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Store(err) = &self {
            tracing::error!("Store error: {err:#?}");
        }
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "Rejected request body");
        ApiError::Unprocessable
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(%rejection, "Rejected path parameter");
        ApiError::NotFound
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(%rejection, "Rejected query string");
        ApiError::NotFound
    }
}
