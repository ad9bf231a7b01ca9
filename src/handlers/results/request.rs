//! Result request DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Create result request
///
/// All fields are caller-provided; results processing is a manual step.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateResultRequest {
    pub student_id: Uuid,

    pub exam_id: Uuid,

    #[validate(range(min = 0, message = "Total marks cannot be negative"))]
    pub total_marks: i32,

    #[validate(range(min = 0.0, max = 100.0, message = "Percentage must be between 0 and 100"))]
    pub percentage: f64,

    #[validate(range(min = 0.0, max = 10.0, message = "CGPA must be between 0 and 10"))]
    pub cgpa: f64,

    /// Pass or Fail
    pub result_status: String,
}

/// Update result request (absent fields keep their values)
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateResultRequest {
    pub student_id: Option<Uuid>,

    pub exam_id: Option<Uuid>,

    #[validate(range(min = 0, message = "Total marks cannot be negative"))]
    pub total_marks: Option<i32>,

    #[validate(range(min = 0.0, max = 100.0, message = "Percentage must be between 0 and 100"))]
    pub percentage: Option<f64>,

    #[validate(range(min = 0.0, max = 10.0, message = "CGPA must be between 0 and 10"))]
    pub cgpa: Option<f64>,

    pub result_status: Option<String>,
}

/// List results query parameters
#[derive(Debug, Deserialize)]
pub struct ListResultsQuery {
    pub student: Option<Uuid>,
    pub exam: Option<Uuid>,
    pub result_status: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
