//! Student request DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_CODE_LENGTH, MAX_NAME_LENGTH, MAX_PHONE_LENGTH};

/// Create student request
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateStudentRequest {
    /// Optional linked login account
    pub user_id: Option<Uuid>,

    #[validate(length(min = 1, max = MAX_CODE_LENGTH, message = "Student ID is required"))]
    pub student_id: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Full name is required"))]
    pub full_name: String,

    #[validate(length(min = 1, max = MAX_CODE_LENGTH, message = "Register number is required"))]
    pub register_no: String,

    pub department_id: Option<Uuid>,

    #[validate(range(min = 1, max = 4, message = "Year must be between 1 and 4"))]
    pub year: i32,

    #[validate(range(min = 1, max = 8, message = "Semester must be between 1 and 8"))]
    pub semester: i32,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = MAX_PHONE_LENGTH, message = "Phone number is required"))]
    pub phone: String,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    /// Defaults to "active" when absent
    pub status: Option<String>,
}

/// Update student request (absent fields keep their values)
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    pub user_id: Option<Uuid>,

    #[validate(length(min = 1, max = MAX_CODE_LENGTH, message = "Student ID cannot be empty"))]
    pub student_id: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Full name cannot be empty"))]
    pub full_name: Option<String>,

    #[validate(length(min = 1, max = MAX_CODE_LENGTH, message = "Register number cannot be empty"))]
    pub register_no: Option<String>,

    pub department_id: Option<Uuid>,

    #[validate(range(min = 1, max = 4, message = "Year must be between 1 and 4"))]
    pub year: Option<i32>,

    #[validate(range(min = 1, max = 8, message = "Semester must be between 1 and 8"))]
    pub semester: Option<i32>,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = MAX_PHONE_LENGTH, message = "Phone number cannot be empty"))]
    pub phone: Option<String>,

    #[validate(length(min = 1, message = "Address cannot be empty"))]
    pub address: Option<String>,

    pub status: Option<String>,
}

/// List students query parameters
#[derive(Debug, Deserialize)]
pub struct ListStudentsQuery {
    pub department: Option<Uuid>,
    pub semester: Option<i32>,
    pub year: Option<i32>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
