//! Hall ticket model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::SoftDelete;

/// Hall ticket database model
///
/// `qr_code` holds the media-relative path of the PNG generated when the
/// ticket was created.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct HallTicket {
    pub id: Uuid,
    pub student_id: Uuid,
    pub exam_id: Uuid,
    pub hall_ticket_number: String,
    pub issued_date: NaiveDate,
    pub qr_code: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl SoftDelete for HallTicket {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Hall ticket joined with student and exam display names
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HallTicketDetail {
    pub id: Uuid,
    pub student_id: Uuid,
    pub student_name: String,
    pub register_no: String,
    pub exam_id: Uuid,
    pub exam_name: String,
    pub hall_ticket_number: String,
    pub issued_date: NaiveDate,
    pub qr_code: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
