//! Notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::SoftDelete;

/// Notification database model
///
/// `target_role` scopes visibility: 'All' is shown to everyone, otherwise
/// only users with the matching role see the notification. Admins see all.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub target_role: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl SoftDelete for Notification {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}
