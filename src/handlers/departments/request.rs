//! Department request DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{MAX_NAME_LENGTH, MAX_SHORT_CODE_LENGTH};

/// Create department request
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Department name is required"))]
    pub department_name: String,

    #[validate(length(min = 1, max = MAX_SHORT_CODE_LENGTH, message = "Department code is required"))]
    pub department_code: String,

    /// Head of department display name
    pub hod: Option<String>,

    pub description: Option<String>,
}

/// Update department request (absent fields keep their values)
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateDepartmentRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Department name cannot be empty"))]
    pub department_name: Option<String>,

    #[validate(length(min = 1, max = MAX_SHORT_CODE_LENGTH, message = "Department code cannot be empty"))]
    pub department_code: Option<String>,

    pub hod: Option<String>,
    pub description: Option<String>,
}

/// List departments query parameters
#[derive(Debug, Deserialize)]
pub struct ListDepartmentsQuery {
    pub search: Option<String>,
    pub ordering: Option<String>,
}
