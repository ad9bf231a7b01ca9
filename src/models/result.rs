//! Result model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::SoftDelete;

/// Result database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ExamResult {
    pub id: Uuid,
    pub student_id: Uuid,
    pub exam_id: Uuid,
    pub total_marks: i32,
    pub percentage: f64,
    pub cgpa: f64,
    pub result_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl SoftDelete for ExamResult {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Result joined with student and exam display names
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExamResultDetail {
    pub id: Uuid,
    pub student_id: Uuid,
    pub student_name: String,
    pub register_no: String,
    pub exam_id: Uuid,
    pub exam_name: String,
    pub total_marks: i32,
    pub percentage: f64,
    pub cgpa: f64,
    pub result_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
