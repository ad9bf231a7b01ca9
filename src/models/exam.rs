//! Exam model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::SoftDelete;

/// Exam database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Exam {
    pub id: Uuid,
    pub exam_name: String,
    pub exam_type: String,
    pub exam_date: NaiveDate,
    /// Duration in minutes
    pub duration: i32,
    pub total_marks: i32,
    pub semester: i32,
    pub department_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl SoftDelete for Exam {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Exam joined with its department's display name
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExamDetail {
    pub id: Uuid,
    pub exam_name: String,
    pub exam_type: String,
    pub exam_date: NaiveDate,
    pub duration: i32,
    pub total_marks: i32,
    pub semester: i32,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
