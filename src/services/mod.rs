//! Business logic services
//!
//! Services contain the business logic of the application, sitting between
//! handlers and repositories. Every mutating service call ends with an
//! explicit audit-trail append.

pub mod audit_service;
pub mod auth_service;
pub mod course_service;
pub mod dashboard_service;
pub mod department_service;
pub mod exam_service;
pub mod hall_ticket_service;
pub mod marks_service;
pub mod notification_service;
pub mod result_service;
pub mod schedule_service;
pub mod staff_service;
pub mod student_service;
pub mod user_service;

pub use audit_service::{AuditContext, AuditService};
pub use auth_service::AuthService;
pub use course_service::CourseService;
pub use dashboard_service::DashboardService;
pub use department_service::DepartmentService;
pub use exam_service::ExamService;
pub use hall_ticket_service::HallTicketService;
pub use marks_service::MarksService;
pub use notification_service::NotificationService;
pub use result_service::ResultService;
pub use schedule_service::ScheduleService;
pub use staff_service::StaffService;
pub use student_service::StudentService;
pub use user_service::UserService;
