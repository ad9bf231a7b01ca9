//! Success response envelope
//!
//! Every successful response carries `{message, data}`; failures go through
//! `AppError` and carry `{message, errors}` instead.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{message, data}` wrapper for successful responses
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// Build an envelope
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    /// 200 response body
    pub fn ok(message: impl Into<String>, data: T) -> Json<Self> {
        Json(Self::new(message, data))
    }

    /// 201 response with body
    pub fn created(message: impl Into<String>, data: T) -> (StatusCode, Json<Self>) {
        (StatusCode::CREATED, Json(Self::new(message, data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        let envelope = Envelope::new("Department created successfully", json!({"id": 1}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["message"], "Department created successfully");
        assert_eq!(value["data"]["id"], 1);
    }

    #[test]
    fn test_unit_data_serializes_as_null() {
        // Delete responses carry no payload
        let envelope = Envelope::new("Department deleted successfully", ());
        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value["data"].is_null());
    }
}
