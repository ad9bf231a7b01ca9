//! Course response DTOs

use crate::{handlers::envelope::Envelope, models::CourseDetail};

/// Single course response
pub type CourseResponse = Envelope<CourseDetail>;

/// Course list response
pub type CourseListResponse = Envelope<Vec<CourseDetail>>;
