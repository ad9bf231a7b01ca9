//! Exam schedule request DTOs

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::MAX_CODE_LENGTH;

/// Create schedule request
///
/// The time-range precondition (`end_time > start_time`) and the hall clash
/// check are cross-field rules owned by the service, not this DTO.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateScheduleRequest {
    pub exam_id: Uuid,

    /// Course sat in this slot
    pub subject_id: Uuid,

    pub date: NaiveDate,

    pub start_time: NaiveTime,

    pub end_time: NaiveTime,

    #[validate(length(min = 1, max = MAX_CODE_LENGTH, message = "Hall number is required"))]
    pub hall_number: String,

    /// Supervising staff member
    pub invigilator: Option<Uuid>,
}

/// Update schedule request (absent fields keep their values)
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateScheduleRequest {
    pub exam_id: Option<Uuid>,

    pub subject_id: Option<Uuid>,

    pub date: Option<NaiveDate>,

    pub start_time: Option<NaiveTime>,

    pub end_time: Option<NaiveTime>,

    #[validate(length(min = 1, max = MAX_CODE_LENGTH, message = "Hall number cannot be empty"))]
    pub hall_number: Option<String>,

    pub invigilator: Option<Uuid>,
}

/// List schedules query parameters
#[derive(Debug, Deserialize)]
pub struct ListSchedulesQuery {
    pub exam: Option<Uuid>,
    pub subject: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}
