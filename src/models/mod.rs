//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod audit;
pub mod course;
pub mod department;
pub mod exam;
pub mod hall_ticket;
pub mod marks;
pub mod notification;
pub mod result;
pub mod schedule;
pub mod staff;
pub mod student;
pub mod user;

pub use audit::*;
pub use course::*;
pub use department::*;
pub use exam::*;
pub use hall_ticket::*;
pub use marks::*;
pub use notification::*;
pub use result::*;
pub use schedule::*;
pub use staff::*;
pub use student::*;
pub use user::*;

/// Entities retired by flag rather than removed from storage
///
/// Deleting sets `is_deleted`; default queries exclude flagged rows, and
/// natural-key uniqueness is scoped to live rows so the identifiers of a
/// deleted record can be reused.
pub trait SoftDelete {
    /// Whether the record has been soft-deleted
    fn is_deleted(&self) -> bool;

    /// Whether the record is visible to default queries
    fn is_live(&self) -> bool {
        !self.is_deleted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn department(is_deleted: bool) -> Department {
        Department {
            id: Uuid::new_v4(),
            department_name: "Computer Science".to_string(),
            department_code: "CSE".to_string(),
            hod: None,
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_deleted,
        }
    }

    #[test]
    fn test_soft_delete_visibility() {
        assert!(department(false).is_live());
        assert!(!department(true).is_live());
    }
}
