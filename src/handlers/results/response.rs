//! Result response DTOs

use crate::{handlers::envelope::Envelope, models::ExamResultDetail};

/// Single result response
pub type ResultResponse = Envelope<ExamResultDetail>;

/// Result list response
pub type ResultListResponse = Envelope<Vec<ExamResultDetail>>;
