//! Department model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::SoftDelete;

/// Department database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Department {
    pub id: Uuid,
    pub department_name: String,
    pub department_code: String,
    pub hod: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl SoftDelete for Department {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Department with live membership counts
///
/// `total_students` / `total_staff` count non-deleted members only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentDetail {
    pub id: Uuid,
    pub department_name: String,
    pub department_code: String,
    pub hod: Option<String>,
    pub description: Option<String>,
    pub total_students: i64,
    pub total_staff: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
