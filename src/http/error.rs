//! Error type for HTTP handlers.

use std::error::Error;
use std::fmt;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use crate::book::BookId;
use crate::error::CatalogError;

#[derive(Debug)]
pub enum ApiError {
    /// No book with this identifier.
    NotFound(BookId),
    /// The store failed.
    Catalog(CatalogError),
    /// An extractor refused the path, query string or body.
    Rejected { status: StatusCode, message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(id) => write!(f, "book not found: {}", id),
            ApiError::Catalog(e) => write!(f, "catalog error: {}", e),
            ApiError::Rejected { message, .. } => write!(f, "{}", message),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Catalog(e) => Some(e),
            ApiError::NotFound(_) | ApiError::Rejected { .. } => None,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::Catalog(err)
    }
}

macro_rules! impl_from_rejection {
    ($($rejection:ty),+) => {
        $(
            impl From<$rejection> for ApiError {
                fn from(rejection: $rejection) -> Self {
                    ApiError::Rejected {
                        status: rejection.status(),
                        message: rejection.body_text(),
                    }
                }
            }
        )+
    };
}

impl_from_rejection!(JsonRejection, PathRejection, QueryRejection);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotFound(id) => warn!(id, "book not found"),
            ApiError::Catalog(e) => error!(error = %e, "catalog operation failed"),
            ApiError::Rejected { status, message } => {
                warn!(status = %status, message = %message, "request rejected")
            }
        }
        let body = json!({ "error": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}
