//! Audit log model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Audit log database model
///
/// Append-only. Rows are never updated or deleted; `user_id` is nullable so
/// the trail survives account removal.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub model_name: String,
    pub object_id: Option<Uuid>,
    pub changes: Option<String>,
    pub ip_address: Option<String>,
    pub timestamp: DateTime<Utc>,
}
