//! Database repositories
//!
//! Repositories handle all direct database interactions. Soft-deletable
//! entities are filtered with `NOT is_deleted` in every default query, and
//! uniqueness probes exclude both soft-deleted rows and an optional record id
//! so updates never conflict with themselves.

pub mod audit_repo;
pub mod course_repo;
pub mod department_repo;
pub mod exam_repo;
pub mod hall_ticket_repo;
pub mod marks_repo;
pub mod notification_repo;
pub mod result_repo;
pub mod schedule_repo;
pub mod staff_repo;
pub mod student_repo;
pub mod user_repo;

pub use audit_repo::AuditRepository;
pub use course_repo::CourseRepository;
pub use department_repo::DepartmentRepository;
pub use exam_repo::ExamRepository;
pub use hall_ticket_repo::HallTicketRepository;
pub use marks_repo::MarksRepository;
pub use notification_repo::NotificationRepository;
pub use result_repo::ResultRepository;
pub use schedule_repo::ScheduleRepository;
pub use staff_repo::StaffRepository;
pub use student_repo::StudentRepository;
pub use user_repo::UserRepository;

/// Build a safe ORDER BY clause from a client-supplied ordering parameter
///
/// `ordering` follows the `column` / `-column` convention; only columns in
/// `allowed` are honored, anything else falls back to `default` (a complete
/// clause such as `"created_at DESC"`). The returned string is interpolated
/// into SQL, so it is built exclusively from the whitelist.
pub(crate) fn order_by(ordering: Option<&str>, allowed: &[&str], default: &str) -> String {
    if let Some(raw) = ordering {
        let (column, direction) = match raw.strip_prefix('-') {
            Some(rest) => (rest, "DESC"),
            None => (raw, "ASC"),
        };

        if allowed.contains(&column) {
            return format!("{} {}", column, direction);
        }
    }

    default.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_by_ascending() {
        assert_eq!(
            order_by(Some("full_name"), &["created_at", "full_name"], "created_at DESC"),
            "full_name ASC"
        );
    }

    #[test]
    fn test_order_by_descending_prefix() {
        assert_eq!(
            order_by(Some("-created_at"), &["created_at", "full_name"], "created_at DESC"),
            "created_at DESC"
        );
    }

    #[test]
    fn test_order_by_rejects_unlisted_columns() {
        // Anything outside the whitelist must fall back to the default,
        // including injection attempts
        assert_eq!(
            order_by(Some("password_hash"), &["created_at"], "created_at DESC"),
            "created_at DESC"
        );
        assert_eq!(
            order_by(Some("created_at; DROP TABLE users"), &["created_at"], "created_at DESC"),
            "created_at DESC"
        );
    }

    #[test]
    fn test_order_by_default_when_absent() {
        assert_eq!(order_by(None, &["name"], "name ASC"), "name ASC");
    }
}
