//! Student response DTOs

use crate::{handlers::envelope::Envelope, models::StudentDetail};

/// Single student response
pub type StudentResponse = Envelope<StudentDetail>;

/// Student list response
pub type StudentListResponse = Envelope<Vec<StudentDetail>>;
