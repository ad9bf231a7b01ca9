//! Staff response DTOs

use crate::{handlers::envelope::Envelope, models::StaffDetail};

/// Single staff member response
pub type StaffResponse = Envelope<StaffDetail>;

/// Staff list response
pub type StaffListResponse = Envelope<Vec<StaffDetail>>;
