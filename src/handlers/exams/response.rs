//! Exam response DTOs

use crate::{handlers::envelope::Envelope, models::ExamDetail};

/// Single exam response
pub type ExamResponse = Envelope<ExamDetail>;

/// Exam list response
pub type ExamListResponse = Envelope<Vec<ExamDetail>>;
