//! Course request DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_NAME_LENGTH, MAX_SHORT_CODE_LENGTH};

/// Create course request
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = MAX_SHORT_CODE_LENGTH, message = "Course code is required"))]
    pub course_code: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Course name is required"))]
    pub course_name: String,

    pub department_id: Option<Uuid>,

    #[validate(range(min = 1, max = 10, message = "Credits must be between 1 and 10"))]
    pub credits: i32,

    #[validate(range(min = 1, max = 8, message = "Semester must be between 1 and 8"))]
    pub semester: i32,

    /// Staff member teaching the course
    pub assigned_faculty: Option<Uuid>,
}

/// Update course request (absent fields keep their values)
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = MAX_SHORT_CODE_LENGTH, message = "Course code cannot be empty"))]
    pub course_code: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Course name cannot be empty"))]
    pub course_name: Option<String>,

    pub department_id: Option<Uuid>,

    #[validate(range(min = 1, max = 10, message = "Credits must be between 1 and 10"))]
    pub credits: Option<i32>,

    #[validate(range(min = 1, max = 8, message = "Semester must be between 1 and 8"))]
    pub semester: Option<i32>,

    pub assigned_faculty: Option<Uuid>,
}

/// List courses query parameters
#[derive(Debug, Deserialize)]
pub struct ListCoursesQuery {
    pub department: Option<Uuid>,
    pub semester: Option<i32>,
    pub assigned_faculty: Option<Uuid>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
