//! Marks entry service
//!
//! `total_marks` and `grade` are derived here on every create and update;
//! callers can never set them. The grade is a step function over the
//! percentage of the owning exam's configured total.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{audit_actions, grades},
    db::repositories::{CourseRepository, ExamRepository, MarksRepository, StudentRepository},
    error::{AppError, AppResult},
    handlers::marks::request::{CreateMarksRequest, UpdateMarksRequest},
    models::{MarksEntry, MarksEntryDetail},
    services::audit_service::{changes_json, AuditContext, AuditService},
};

const MODEL_NAME: &str = "MarksEntry";

/// Letter grade for a percentage, inclusive on each band's lower bound
fn grade_for(percentage: f64) -> &'static str {
    if percentage >= 90.0 {
        grades::OUTSTANDING
    } else if percentage >= 80.0 {
        grades::EXCELLENT
    } else if percentage >= 70.0 {
        grades::VERY_GOOD
    } else if percentage >= 60.0 {
        grades::GOOD
    } else if percentage >= 50.0 {
        grades::ABOVE_AVERAGE
    } else if percentage >= 40.0 {
        grades::AVERAGE
    } else {
        grades::FAIL
    }
}

/// Derive (total, grade) from the component marks and the exam's maximum
///
/// An exam configured with a non-positive total is a defined error here
/// rather than a division blow-up. No clamping: totals beyond the maximum
/// grade as 'O', which is why the save path separately rejects components
/// exceeding the exam total.
fn compute_total_and_grade(
    internal_marks: i32,
    external_marks: i32,
    exam_total_marks: i32,
) -> AppResult<(i32, &'static str)> {
    if exam_total_marks <= 0 {
        return Err(AppError::validation(
            "Exam total marks must be greater than zero",
        ));
    }

    let total = internal_marks + external_marks;
    let percentage = f64::from(total) / f64::from(exam_total_marks) * 100.0;

    Ok((total, grade_for(percentage)))
}

/// Marks entry service
pub struct MarksService;

impl MarksService {
    /// Create a marks entry with derived total and grade
    pub async fn create(
        pool: &PgPool,
        ctx: &AuditContext,
        payload: CreateMarksRequest,
    ) -> AppResult<MarksEntryDetail> {
        Self::check_references(
            pool,
            Some(&payload.student_id),
            Some(&payload.subject_id),
        )
        .await?;

        let exam = ExamRepository::find_by_id(pool, &payload.exam_id)
            .await?
            .ok_or_else(|| AppError::field("exam_id", "Exam not found"))?;

        if MarksRepository::entry_exists(
            pool,
            &payload.student_id,
            &payload.subject_id,
            &payload.exam_id,
            None,
        )
        .await?
        {
            return Err(AppError::validation(
                "Marks already entered for this student, subject and exam",
            ));
        }

        Self::check_components(payload.internal_marks, payload.external_marks, &exam)?;
        let (total, grade) =
            compute_total_and_grade(payload.internal_marks, payload.external_marks, exam.total_marks)?;

        let entry = MarksRepository::create(
            pool,
            &payload.student_id,
            &payload.subject_id,
            &payload.exam_id,
            payload.internal_marks,
            payload.external_marks,
            total,
            grade,
            payload.remarks.as_deref(),
        )
        .await?;

        AuditService::record(
            pool,
            ctx,
            audit_actions::CREATE,
            MODEL_NAME,
            Some(&entry.id),
            changes_json(&payload),
        )
        .await?;

        Self::detail(pool, &entry.id).await
    }

    /// Update a marks entry, recomputing total and grade from merged values
    pub async fn update(
        pool: &PgPool,
        ctx: &AuditContext,
        id: &Uuid,
        payload: UpdateMarksRequest,
    ) -> AppResult<MarksEntryDetail> {
        let existing = MarksRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Marks entry not found".to_string()))?;

        Self::check_references(pool, payload.student_id.as_ref(), payload.subject_id.as_ref())
            .await?;

        let exam_id = payload.exam_id.unwrap_or(existing.exam_id);
        let exam = ExamRepository::find_by_id(pool, &exam_id)
            .await?
            .ok_or_else(|| AppError::field("exam_id", "Exam not found"))?;

        let student_id = payload.student_id.unwrap_or(existing.student_id);
        let subject_id = payload.subject_id.unwrap_or(existing.subject_id);
        if MarksRepository::entry_exists(pool, &student_id, &subject_id, &exam_id, Some(id)).await? {
            return Err(AppError::validation(
                "Marks already entered for this student, subject and exam",
            ));
        }

        let internal = payload.internal_marks.unwrap_or(existing.internal_marks);
        let external = payload.external_marks.unwrap_or(existing.external_marks);
        Self::check_components(internal, external, &exam)?;
        let (total, grade) = compute_total_and_grade(internal, external, exam.total_marks)?;

        let updated = MarksRepository::update(
            pool,
            id,
            payload.student_id.as_ref(),
            payload.subject_id.as_ref(),
            payload.exam_id.as_ref(),
            payload.internal_marks,
            payload.external_marks,
            total,
            grade,
            payload.remarks.as_deref(),
        )
        .await?;

        AuditService::record(
            pool,
            ctx,
            audit_actions::UPDATE,
            MODEL_NAME,
            Some(&updated.id),
            changes_json(&payload),
        )
        .await?;

        Self::detail(pool, &updated.id).await
    }

    /// Get one marks entry with joined display names
    pub async fn get(pool: &PgPool, id: &Uuid) -> AppResult<MarksEntryDetail> {
        Self::detail(pool, id).await
    }

    /// List marks entries
    #[allow(clippy::too_many_arguments)]
    pub async fn list(
        pool: &PgPool,
        student_id: Option<&Uuid>,
        subject_id: Option<&Uuid>,
        exam_id: Option<&Uuid>,
        grade: Option<&str>,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> AppResult<Vec<MarksEntryDetail>> {
        MarksRepository::list(pool, student_id, subject_id, exam_id, grade, search, ordering).await
    }

    /// Soft-delete a marks entry
    pub async fn delete(pool: &PgPool, ctx: &AuditContext, id: &Uuid) -> AppResult<()> {
        if !MarksRepository::soft_delete(pool, id).await? {
            return Err(AppError::NotFound("Marks entry not found".to_string()));
        }

        AuditService::record(pool, ctx, audit_actions::DELETE, MODEL_NAME, Some(id), None).await?;

        Ok(())
    }

    /// Cross-field check: components may not exceed the exam's maximum
    fn check_components(
        internal_marks: i32,
        external_marks: i32,
        exam: &crate::models::Exam,
    ) -> AppResult<()> {
        let total = internal_marks + external_marks;
        if total > exam.total_marks {
            return Err(AppError::validation(format!(
                "Total marks ({}) cannot exceed exam total marks ({})",
                total, exam.total_marks
            )));
        }

        Ok(())
    }

    /// Verify provided references point at live rows
    async fn check_references(
        pool: &PgPool,
        student_id: Option<&Uuid>,
        subject_id: Option<&Uuid>,
    ) -> AppResult<()> {
        if let Some(student_id) = student_id {
            if StudentRepository::find_by_id(pool, student_id).await?.is_none() {
                return Err(AppError::field("student_id", "Student not found"));
            }
        }

        if let Some(subject_id) = subject_id {
            if CourseRepository::find_by_id(pool, subject_id).await?.is_none() {
                return Err(AppError::field("subject_id", "Subject not found"));
            }
        }

        Ok(())
    }

    async fn detail(pool: &PgPool, id: &Uuid) -> AppResult<MarksEntryDetail> {
        MarksRepository::find_detail_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Marks entry not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_bands_inclusive_lower_bounds() {
        assert_eq!(grade_for(100.0), "O");
        assert_eq!(grade_for(90.0), "O");
        assert_eq!(grade_for(89.9), "A+");
        assert_eq!(grade_for(80.0), "A+");
        assert_eq!(grade_for(70.0), "A");
        assert_eq!(grade_for(60.0), "B+");
        assert_eq!(grade_for(50.0), "B");
        assert_eq!(grade_for(40.0), "C");
        assert_eq!(grade_for(39.9), "F");
        assert_eq!(grade_for(0.0), "F");
    }

    #[test]
    fn test_every_band_yields_a_known_grade() {
        for pct in [0.0, 39.9, 40.0, 55.0, 65.0, 75.0, 85.0, 95.0, 120.0] {
            assert!(grades::ALL.contains(&grade_for(pct)));
        }
    }

    #[test]
    fn test_total_and_grade_forty_two_percent() {
        // 42/100 falls in [40, 50) => 'C'
        let (total, grade) = compute_total_and_grade(42, 0, 100).unwrap();
        assert_eq!(total, 42);
        assert_eq!(grade, "C");
    }

    #[test]
    fn test_total_and_grade_ninety_three_percent() {
        let (total, grade) = compute_total_and_grade(18, 75, 100).unwrap();
        assert_eq!(total, 93);
        assert_eq!(grade, "O");
    }

    #[test]
    fn test_percentage_scales_with_exam_total() {
        // 30/50 = 60% => 'B+'
        let (total, grade) = compute_total_and_grade(12, 18, 50).unwrap();
        assert_eq!(total, 30);
        assert_eq!(grade, "B+");
    }

    #[test]
    fn test_zero_exam_total_is_a_defined_error() {
        assert!(compute_total_and_grade(10, 10, 0).is_err());
        assert!(compute_total_and_grade(10, 10, -5).is_err());
    }

    #[test]
    fn test_no_clamping_above_maximum() {
        // The calculator itself does not clamp; the save path's cross-field
        // check is what keeps totals within the exam maximum
        let (total, grade) = compute_total_and_grade(80, 60, 100).unwrap();
        assert_eq!(total, 140);
        assert_eq!(grade, "O");
    }

    #[test]
    fn test_idempotent_for_same_inputs() {
        let first = compute_total_and_grade(35, 40, 100).unwrap();
        let second = compute_total_and_grade(35, 40, 100).unwrap();
        assert_eq!(first, second);
    }
}
