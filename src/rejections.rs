use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Failure of a single request. Each variant maps to exactly one status code.
#[derive(Debug)]
pub enum AppError {
    BadRequest(&'static str),
    NotFound(&'static str),
    MethodNotAllowed,
    Unprocessable(&'static str),
    Internal(&'static str),
}

#[derive(Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: u16,
    message: &'static str,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "Bad Request",
            AppError::NotFound(_) => "Resource Not Found",
            AppError::MethodNotAllowed => "Method Not Allowed",
            AppError::Unprocessable(_) => "Unprocessable",
            AppError::Internal(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Internal(detail) => tracing::error!("internal error: {detail}"),
            AppError::BadRequest(detail)
            | AppError::NotFound(detail)
            | AppError::Unprocessable(detail) => {
                tracing::warn!(status = status.as_u16(), "{detail}")
            }
            AppError::MethodNotAllowed => tracing::warn!("method not allowed"),
        }

        let body = ErrorEnvelope {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("rejected request body: {rejection}");
        AppError::BadRequest("malformed request body")
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!("rejected path parameter: {rejection}");
        AppError::NotFound("no resource at this path")
    }
}

pub trait ResultExt<T> {
    /// Log the error and turn it into a 500.
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
    /// Log the error and turn it into a 422.
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal(msg)
        })
    }

    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{msg}: {e}");
            AppError::Unprocessable(msg)
        })
    }
}

pub async fn not_found() -> AppError {
    AppError::NotFound("no route matches this path")
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
