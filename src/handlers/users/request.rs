//! User management request DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH};

/// Create user request
///
/// Not serialized into the audit trail; the service records a payload with
/// the password stripped.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = MAX_USERNAME_LENGTH, message = "Username must be between 3 and 150 characters"))]
    pub username: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// One of Admin, Staff, Student
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Update user request (absent fields keep their values)
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = MAX_USERNAME_LENGTH, message = "Username must be between 3 and 150 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: Option<String>,

    pub role: Option<String>,

    pub is_active: Option<bool>,
}

/// List users query parameters
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<String>,
    pub search: Option<String>,
}
