//! Staff member model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::SoftDelete;

/// Staff database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Staff {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub staff_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department_id: Option<Uuid>,
    pub designation: String,
    pub qualification: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl SoftDelete for Staff {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Staff member joined with its department's display name
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StaffDetail {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub staff_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
    pub designation: String,
    pub qualification: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
