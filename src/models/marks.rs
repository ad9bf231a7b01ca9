//! Marks entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::SoftDelete;

/// Marks entry database model
///
/// `total_marks` and `grade` are always derived from the internal and
/// external components against the exam's configured total before the row
/// is persisted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MarksEntry {
    pub id: Uuid,
    pub student_id: Uuid,
    pub subject_id: Uuid,
    pub exam_id: Uuid,
    pub internal_marks: i32,
    pub external_marks: i32,
    pub total_marks: i32,
    pub grade: Option<String>,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl SoftDelete for MarksEntry {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Marks entry joined with student, subject and exam display names
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MarksEntryDetail {
    pub id: Uuid,
    pub student_id: Uuid,
    pub student_name: String,
    pub subject_id: Uuid,
    pub subject_name: String,
    pub exam_id: Uuid,
    pub exam_name: String,
    pub internal_marks: i32,
    pub external_marks: i32,
    pub total_marks: i32,
    pub grade: Option<String>,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
