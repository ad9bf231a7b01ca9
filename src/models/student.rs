//! Student model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::SoftDelete;

/// Student database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub student_id: String,
    pub full_name: String,
    pub register_no: String,
    pub department_id: Option<Uuid>,
    pub year: i32,
    pub semester: i32,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl SoftDelete for Student {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Student joined with its department's display name
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentDetail {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub student_id: String,
    pub full_name: String,
    pub register_no: String,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
    pub year: i32,
    pub semester: i32,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
