//! Exam schedule response DTOs

use crate::{handlers::envelope::Envelope, models::ExamScheduleDetail};

/// Single schedule response
pub type ScheduleResponse = Envelope<ExamScheduleDetail>;

/// Schedule list response
pub type ScheduleListResponse = Envelope<Vec<ExamScheduleDetail>>;
