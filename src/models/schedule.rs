//! Exam schedule model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::SoftDelete;

/// Exam schedule database model
///
/// Represents one sitting of an exam subject in a hall. The time slot is
/// treated as the half-open interval `[start_time, end_time)` when checking
/// for hall booking conflicts.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ExamSchedule {
    pub id: Uuid,
    pub exam_id: Uuid,
    pub subject_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub hall_number: String,
    pub invigilator: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl SoftDelete for ExamSchedule {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Schedule joined with exam, subject and invigilator display names
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExamScheduleDetail {
    pub id: Uuid,
    pub exam_id: Uuid,
    pub exam_name: String,
    pub subject_id: Uuid,
    pub subject_name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub hall_number: String,
    pub invigilator: Option<Uuid>,
    pub invigilator_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
