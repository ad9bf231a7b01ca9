//! Notification response DTOs

use crate::{handlers::envelope::Envelope, models::Notification};

/// Single notification response
pub type NotificationResponse = Envelope<Notification>;

/// Notification list response
pub type NotificationListResponse = Envelope<Vec<Notification>>;
