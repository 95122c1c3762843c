use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A failure raised with an explicit status, e.g. by [`invariant_response`]
    #[error("{message}")]
    Status { status: StatusCode, message: String },
    /// A failure a route boundary has already turned into its final message
    #[error("{message}")]
    Caught { status: StatusCode, message: String },
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error(transparent)]
    Core(#[from] scribble_core::Error),
}

/// What a failed request reported, attached to the error response so the
/// page renderer can turn it into HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub status: StatusCode,
    pub message: String,
    /// Whether a route boundary produced the message
    pub caught: bool,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Unwrap `value` or fail the request with `status` and `message`.
pub fn invariant_response<T>(
    value: Option<T>,
    message: impl Into<String>,
    status: StatusCode,
) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Status {
        status,
        message: message.into(),
    })
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Status {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Status { status, .. } | Self::Caught { status, .. } => *status,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Core(scribble_core::Error::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Core(scribble_core::Error::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Let a route boundary replace the message for statuses it handles.
    ///
    /// `handler` returns the replacement for a status, or `None` to let the
    /// error through unchanged. Errors that were already caught keep their
    /// message.
    #[must_use]
    pub fn caught_by(self, handler: impl FnOnce(StatusCode) -> Option<String>) -> Self {
        if matches!(self, Self::Caught { .. }) {
            return self;
        }
        let status = self.status();
        match handler(status) {
            Some(message) => Self::Caught { status, message },
            None => self,
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::Status { message, .. } | Self::Caught { message, .. } => message.clone(),
            Self::Core(scribble_core::Error::NotFound(message)) => message.clone(),
            Self::Core(scribble_core::Error::InvalidInput(message)) => {
                format!("Invalid request: {message}")
            }
            Self::Core(_) => "Internal server error".to_string(),
            Self::BadRequest(_) | Self::Forbidden(_) => self.to_string(),
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            status: self.status(),
            message: self.public_message(),
            caught: matches!(self, Self::Caught { .. }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let report = self.report();
        if report.status.is_server_error() {
            tracing::error!(status = report.status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = report.status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: report.message.clone(),
        };
        let mut response = (report.status, Json(body)).into_response();
        response.extensions_mut().insert(report);
        response
    }
}
