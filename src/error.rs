//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework. Error responses
//! follow the `{message, errors}` envelope, with `errors` carrying a
//! field-keyed map for validation failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Login failed")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Authentication credentials were not provided")]
    Unauthorized,

    #[error("Access denied. Only Admin users can login.")]
    AdminLoginOnly,

    #[error("{0}")]
    Forbidden(String),

    // Validation errors carry the field-keyed map returned to the client
    #[error("Validation failed")]
    Validation { errors: serde_json::Value },

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl AppError {
    /// Record-level validation failure, keyed under `non_field_errors`
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Validation {
            errors: json!({ "non_field_errors": [message] }),
        }
    }

    /// Validation failure attributed to a single field
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Validation {
            errors: json!({ field: [message] }),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidToken | Self::TokenExpired | Self::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden(_) | Self::AdminLoginOnly => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) | Self::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Field-keyed error map for the response body, where one applies
    fn error_map(&self) -> Option<serde_json::Value> {
        match self {
            Self::InvalidCredentials => Some(json!({
                "non_field_errors": ["Invalid credentials"]
            })),
            Self::AdminLoginOnly => Some(json!({
                "role": ["Only Admin users are allowed to access this system."]
            })),
            Self::Validation { errors } => Some(errors.clone()),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "A database error occurred".to_string()
            }
            AppError::Configuration(e) => {
                tracing::error!("Configuration error: {}", e);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorBody {
            message,
            errors: self.error_map(),
        };

        (status, Json(body)).into_response()
    }
}

// Implement From for common error types
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                // Unique violations surface as validation failures, matching
                // the explicit pre-insert uniqueness probes
                if db_err.is_unique_violation() {
                    AppError::validation("Resource already exists")
                } else {
                    AppError::Database(db_err.to_string())
                }
            }
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut map = serde_json::Map::new();
        for (field, errors) in err.field_errors() {
            let messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {field}"))
                })
                .map(serde_json::Value::String)
                .collect();
            map.insert(field.to_string(), serde_json::Value::Array(messages));
        }
        AppError::Validation {
            errors: serde_json::Value::Object(map),
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::AdminLoginOnly.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::NotFound("Student not found".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::validation("Hall is already booked for this time slot").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_field_constructor_keys_errors_by_field() {
        let err = AppError::field("department_code", "Department Code already exists");
        let map = err.error_map().unwrap();
        assert_eq!(
            map["department_code"][0],
            json!("Department Code already exists")
        );
    }

    #[test]
    fn test_admin_login_only_payload() {
        let err = AppError::AdminLoginOnly;
        assert_eq!(err.to_string(), "Access denied. Only Admin users can login.");
        let map = err.error_map().unwrap();
        assert_eq!(
            map["role"][0],
            json!("Only Admin users are allowed to access this system.")
        );
    }
}
