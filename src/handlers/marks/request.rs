//! Marks entry request DTOs
//!
//! `total_marks` and `grade` are deliberately absent: they are derived by
//! the service on every save and can never be supplied by the caller.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Create marks entry request
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateMarksRequest {
    pub student_id: Uuid,

    /// Course the marks were scored in
    pub subject_id: Uuid,

    pub exam_id: Uuid,

    #[validate(range(min = 0, message = "Internal marks cannot be negative"))]
    pub internal_marks: i32,

    #[validate(range(min = 0, message = "External marks cannot be negative"))]
    pub external_marks: i32,

    pub remarks: Option<String>,
}

/// Update marks entry request (absent fields keep their values)
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateMarksRequest {
    pub student_id: Option<Uuid>,

    pub subject_id: Option<Uuid>,

    pub exam_id: Option<Uuid>,

    #[validate(range(min = 0, message = "Internal marks cannot be negative"))]
    pub internal_marks: Option<i32>,

    #[validate(range(min = 0, message = "External marks cannot be negative"))]
    pub external_marks: Option<i32>,

    pub remarks: Option<String>,
}

/// List marks query parameters
#[derive(Debug, Deserialize)]
pub struct ListMarksQuery {
    pub student: Option<Uuid>,
    pub subject: Option<Uuid>,
    pub exam: Option<Uuid>,
    pub grade: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
