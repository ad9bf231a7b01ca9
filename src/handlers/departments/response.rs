//! Department response DTOs

use crate::{handlers::envelope::Envelope, models::DepartmentDetail};

/// Single department response, with live membership counts
pub type DepartmentResponse = Envelope<DepartmentDetail>;

/// Department list response
pub type DepartmentListResponse = Envelope<Vec<DepartmentDetail>>;
