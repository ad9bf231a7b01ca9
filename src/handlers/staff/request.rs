//! Staff request DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_CODE_LENGTH, MAX_NAME_LENGTH, MAX_PHONE_LENGTH};

/// Create staff request
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateStaffRequest {
    /// Optional linked login account
    pub user_id: Option<Uuid>,

    #[validate(length(min = 1, max = MAX_CODE_LENGTH, message = "Staff ID is required"))]
    pub staff_id: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = MAX_PHONE_LENGTH, message = "Phone number is required"))]
    pub phone: String,

    pub department_id: Option<Uuid>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Designation is required"))]
    pub designation: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Qualification is required"))]
    pub qualification: String,
}

/// Update staff request (absent fields keep their values)
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateStaffRequest {
    pub user_id: Option<Uuid>,

    #[validate(length(min = 1, max = MAX_CODE_LENGTH, message = "Staff ID cannot be empty"))]
    pub staff_id: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = MAX_PHONE_LENGTH, message = "Phone number cannot be empty"))]
    pub phone: Option<String>,

    pub department_id: Option<Uuid>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Designation cannot be empty"))]
    pub designation: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Qualification cannot be empty"))]
    pub qualification: Option<String>,
}

/// List staff query parameters
#[derive(Debug, Deserialize)]
pub struct ListStaffQuery {
    pub department: Option<Uuid>,
    pub designation: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
