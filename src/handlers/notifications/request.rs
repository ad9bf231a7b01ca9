//! Notification request DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::MAX_NAME_LENGTH;

/// Create notification request
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,

    /// One of All, Admin, Staff, Student; defaults to All
    pub target_role: Option<String>,
}

/// Update notification request (absent fields keep their values)
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateNotificationRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: Option<String>,

    pub target_role: Option<String>,

    pub is_read: Option<bool>,
}

/// List notifications query parameters
#[derive(Debug, Deserialize)]
pub struct ListNotificationsQuery {
    pub target_role: Option<String>,
    pub is_read: Option<bool>,
    pub search: Option<String>,
}
