//! Hall ticket request DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::MAX_CODE_LENGTH;

/// Create hall ticket request
///
/// `issued_date` and the QR code path are server-assigned at creation.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateHallTicketRequest {
    pub student_id: Uuid,

    pub exam_id: Uuid,

    #[validate(length(min = 1, max = MAX_CODE_LENGTH, message = "Hall ticket number is required"))]
    pub hall_ticket_number: String,

    pub photo_url: Option<String>,
}

/// Update hall ticket request (absent fields keep their values)
///
/// The QR code is never regenerated, even when the ticket number changes.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateHallTicketRequest {
    pub student_id: Option<Uuid>,

    pub exam_id: Option<Uuid>,

    #[validate(length(min = 1, max = MAX_CODE_LENGTH, message = "Hall ticket number cannot be empty"))]
    pub hall_ticket_number: Option<String>,

    pub photo_url: Option<String>,
}

/// List hall tickets query parameters
#[derive(Debug, Deserialize)]
pub struct ListHallTicketsQuery {
    pub student: Option<Uuid>,
    pub exam: Option<Uuid>,
    pub search: Option<String>,
}
