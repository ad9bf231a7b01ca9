//! Course model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::SoftDelete;

/// Course database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub course_code: String,
    pub course_name: String,
    pub department_id: Option<Uuid>,
    pub credits: i32,
    pub semester: i32,
    pub assigned_faculty: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl SoftDelete for Course {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Course joined with department and assigned faculty display names
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseDetail {
    pub id: Uuid,
    pub course_code: String,
    pub course_name: String,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
    pub credits: i32,
    pub semester: i32,
    pub assigned_faculty: Option<Uuid>,
    pub faculty_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
