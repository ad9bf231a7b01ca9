//! Marks entry response DTOs

use crate::{handlers::envelope::Envelope, models::MarksEntryDetail};

/// Single marks entry response, carrying the derived total and grade
pub type MarksResponse = Envelope<MarksEntryDetail>;

/// Marks list response
pub type MarksListResponse = Envelope<Vec<MarksEntryDetail>>;
