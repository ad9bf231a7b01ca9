//! Hall ticket response DTOs

use crate::{handlers::envelope::Envelope, models::HallTicketDetail};

/// Single hall ticket response
pub type HallTicketResponse = Envelope<HallTicketDetail>;

/// Hall ticket list response
pub type HallTicketListResponse = Envelope<Vec<HallTicketDetail>>;
