//! Exam request DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::MAX_NAME_LENGTH;

/// Create exam request
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateExamRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Exam name is required"))]
    pub exam_name: String,

    /// One of Internal, Model, Semester
    pub exam_type: String,

    pub exam_date: NaiveDate,

    /// Duration in minutes
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: i32,

    /// Maximum obtainable marks; grade percentages are computed against this
    #[validate(range(min = 0, message = "Total marks cannot be negative"))]
    pub total_marks: i32,

    #[validate(range(min = 1, max = 8, message = "Semester must be between 1 and 8"))]
    pub semester: i32,

    pub department_id: Option<Uuid>,
}

/// Update exam request (absent fields keep their values)
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateExamRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Exam name cannot be empty"))]
    pub exam_name: Option<String>,

    pub exam_type: Option<String>,

    pub exam_date: Option<NaiveDate>,

    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: Option<i32>,

    #[validate(range(min = 0, message = "Total marks cannot be negative"))]
    pub total_marks: Option<i32>,

    #[validate(range(min = 1, max = 8, message = "Semester must be between 1 and 8"))]
    pub semester: Option<i32>,

    pub department_id: Option<Uuid>,
}

/// List exams query parameters
#[derive(Debug, Deserialize)]
pub struct ListExamsQuery {
    pub exam_type: Option<String>,
    pub semester: Option<i32>,
    pub department: Option<Uuid>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
