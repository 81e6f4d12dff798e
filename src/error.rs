use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

/// Wire representation of a failure, shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    /// Request failed a validation check. `code` is the machine code
    /// (`MISSING_URL`, `INVALID_MODE`, ...), `value` the offending input.
    Validation {
        code: &'static str,
        message: String,
        value: Option<String>,
    },
    /// The outbound generation call failed or produced unusable output.
    Generation {
        message: String,
        extra: Option<String>,
    },
    NotFound { message: String },
    /// Unique-constraint violation. Never surfaced directly by the creation
    /// path; the link service retries with a fresh slug first.
    Conflict { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            value: None,
        }
    }

    pub fn validation_with_value(
        code: &'static str,
        message: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            value: Some(value.into()),
        }
    }

    pub fn generation(message: impl Into<String>, extra: Option<String>) -> Self {
        Self::Generation {
            message: message.into(),
            extra,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { code, message, .. } => write!(f, "{code}: {message}"),
            Self::Generation { message, .. } => write!(f, "{message}"),
            Self::NotFound { message } => write!(f, "{message}"),
            Self::Conflict { message } => write!(f, "{message}"),
            Self::Internal { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation {
                code,
                message,
                value,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: code,
                    message,
                    value,
                    extra: None,
                },
            ),
            AppError::Generation { message, extra } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "GENERATION_FAILED",
                    message,
                    value: None,
                    extra,
                },
            ),
            AppError::NotFound { message } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "NOT_FOUND",
                    message,
                    value: None,
                    extra: None,
                },
            ),
            AppError::Conflict { message } => (
                StatusCode::CONFLICT,
                ErrorBody {
                    error: "CONFLICT",
                    message,
                    value: None,
                    extra: None,
                },
            ),
            AppError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "INTERNAL_ERROR",
                    message,
                    value: None,
                    extra: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict("Unique constraint violation");
    }

    AppError::internal("Database error")
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}
