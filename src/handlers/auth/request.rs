//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH};

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = MAX_USERNAME_LENGTH, message = "Username must be between 3 and 150 characters"))]
    pub username: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Defaults to Student when absent
    pub role: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh: String,
}

/// Profile update request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 3, max = MAX_USERNAME_LENGTH, message = "Username must be between 3 and 150 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: Option<String>,
}
