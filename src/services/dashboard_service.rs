//! Dashboard aggregate service

use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;

use crate::{
    constants::UPCOMING_EXAM_WINDOW_DAYS,
    db::repositories::{
        CourseRepository, DepartmentRepository, ExamRepository, ResultRepository, StaffRepository,
        StudentRepository,
    },
    error::AppResult,
};

/// Dashboard counters
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_students: i64,
    pub total_staff: i64,
    pub total_departments: i64,
    pub total_courses: i64,
    pub upcoming_exams: i64,
    // Attendance tracking was never wired up; the dashboard contract still
    // carries the fields
    pub attendance_today: i64,
    pub attendance_percentage: f64,
    pub results: ResultSummary,
}

/// Pass/fail breakdown of published results
#[derive(Debug, Serialize)]
pub struct ResultSummary {
    pub total: i64,
    pub passed: i64,
    pub failed: i64,
    pub pass_percentage: f64,
}

impl ResultSummary {
    fn from_counts(total: i64, passed: i64) -> Self {
        let pass_percentage = if total > 0 {
            (passed as f64 / total as f64 * 100.0 * 100.0).round() / 100.0
        } else {
            0.0
        };

        Self {
            total,
            passed,
            failed: total - passed,
            pass_percentage,
        }
    }
}

/// Dashboard service
pub struct DashboardService;

impl DashboardService {
    /// Aggregate the dashboard counters, querying concurrently
    pub async fn summary(pool: &PgPool) -> AppResult<DashboardSummary> {
        let today = Utc::now().date_naive();

        let (total_students, total_staff, total_departments, total_courses, upcoming_exams, results) =
            futures::try_join!(
                StudentRepository::count_active(pool),
                StaffRepository::count(pool),
                DepartmentRepository::count(pool),
                CourseRepository::count(pool),
                ExamRepository::count_upcoming(pool, today, UPCOMING_EXAM_WINDOW_DAYS),
                ResultRepository::pass_fail_counts(pool),
            )?;

        let (result_total, result_passed) = results;

        Ok(DashboardSummary {
            total_students,
            total_staff,
            total_departments,
            total_courses,
            upcoming_exams,
            attendance_today: 0,
            attendance_percentage: 0.0,
            results: ResultSummary::from_counts(result_total, result_passed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_summary_rounds_to_two_decimals() {
        let summary = ResultSummary::from_counts(3, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.pass_percentage, 66.67);
    }

    #[test]
    fn test_result_summary_empty_is_zero() {
        let summary = ResultSummary::from_counts(0, 0);
        assert_eq!(summary.pass_percentage, 0.0);
        assert_eq!(summary.failed, 0);
    }

    #[test]
    fn test_result_summary_all_passed() {
        let summary = ResultSummary::from_counts(8, 8);
        assert_eq!(summary.pass_percentage, 100.0);
    }
}
