//! Result repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{ExamResult, ExamResultDetail},
};

use super::order_by;

const DETAIL_SELECT: &str = r#"
    SELECT r.id, r.student_id, s.full_name AS student_name, s.register_no,
           r.exam_id, e.exam_name, r.total_marks, r.percentage, r.cgpa,
           r.result_status, r.created_at, r.updated_at
    FROM results r
    JOIN students s ON s.id = r.student_id
    JOIN exams e ON e.id = r.exam_id
"#;

/// Repository for result database operations
pub struct ResultRepository;

impl ResultRepository {
    /// Create a new result
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        student_id: &Uuid,
        exam_id: &Uuid,
        total_marks: i32,
        percentage: f64,
        cgpa: f64,
        result_status: &str,
    ) -> AppResult<ExamResult> {
        let result = sqlx::query_as::<_, ExamResult>(
            r#"
            INSERT INTO results (
                student_id, exam_id, total_marks, percentage, cgpa,
                result_status
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(student_id)
        .bind(exam_id)
        .bind(total_marks)
        .bind(percentage)
        .bind(cgpa)
        .bind(result_status)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// Find a live result by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<ExamResult>> {
        let result = sqlx::query_as::<_, ExamResult>(
            r#"SELECT * FROM results WHERE id = $1 AND NOT is_deleted"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(result)
    }

    /// Find a live result with student and exam names
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: &Uuid,
    ) -> AppResult<Option<ExamResultDetail>> {
        let sql = format!("{DETAIL_SELECT} WHERE r.id = $1 AND NOT r.is_deleted");

        let detail = sqlx::query_as::<_, ExamResultDetail>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(detail)
    }

    /// List live results with equality filters, search and ordering
    pub async fn list(
        pool: &PgPool,
        student_id: Option<&Uuid>,
        exam_id: Option<&Uuid>,
        result_status: Option<&str>,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> AppResult<Vec<ExamResultDetail>> {
        let order = order_by(
            ordering,
            &["percentage", "cgpa", "created_at"],
            "created_at DESC",
        );
        let sql = format!(
            r#"{DETAIL_SELECT}
            WHERE NOT r.is_deleted
              AND ($1::uuid IS NULL OR r.student_id = $1)
              AND ($2::uuid IS NULL OR r.exam_id = $2)
              AND ($3::text IS NULL OR r.result_status = $3)
              AND ($4::text IS NULL OR s.full_name ILIKE $4 OR s.register_no ILIKE $4)
            ORDER BY r.{order}"#
        );

        let results = sqlx::query_as::<_, ExamResultDetail>(&sql)
            .bind(student_id)
            .bind(exam_id)
            .bind(result_status)
            .bind(search.map(|s| format!("%{}%", s)))
            .fetch_all(pool)
            .await?;

        Ok(results)
    }

    /// All live results belonging to one student
    pub async fn find_by_student(
        pool: &PgPool,
        student_id: &Uuid,
    ) -> AppResult<Vec<ExamResultDetail>> {
        let sql = format!(
            r#"{DETAIL_SELECT}
            WHERE r.student_id = $1 AND NOT r.is_deleted
            ORDER BY r.created_at DESC"#
        );

        let results = sqlx::query_as::<_, ExamResultDetail>(&sql)
            .bind(student_id)
            .fetch_all(pool)
            .await?;

        Ok(results)
    }

    /// Update a result; absent values keep their current value
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        student_id: Option<&Uuid>,
        exam_id: Option<&Uuid>,
        total_marks: Option<i32>,
        percentage: Option<f64>,
        cgpa: Option<f64>,
        result_status: Option<&str>,
    ) -> AppResult<ExamResult> {
        let result = sqlx::query_as::<_, ExamResult>(
            r#"
            UPDATE results
            SET student_id = COALESCE($2, student_id),
                exam_id = COALESCE($3, exam_id),
                total_marks = COALESCE($4, total_marks),
                percentage = COALESCE($5, percentage),
                cgpa = COALESCE($6, cgpa),
                result_status = COALESCE($7, result_status),
                updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(student_id)
        .bind(exam_id)
        .bind(total_marks)
        .bind(percentage)
        .bind(cgpa)
        .bind(result_status)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// Soft-delete a result; returns false if it was already gone
    pub async fn soft_delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE results SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether a (student, exam) pair already has a live result
    pub async fn student_exam_exists(
        pool: &PgPool,
        student_id: &Uuid,
        exam_id: &Uuid,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM results
                WHERE student_id = $1 AND exam_id = $2 AND NOT is_deleted
                  AND ($3::uuid IS NULL OR id <> $3)
            )
            "#,
        )
        .bind(student_id)
        .bind(exam_id)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Count live results split into (total, passed) (dashboard)
    pub async fn pass_fail_counts(pool: &PgPool) -> AppResult<(i64, i64)> {
        let (total, passed): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*),
                   COUNT(*) FILTER (WHERE result_status = 'Pass')
            FROM results
            WHERE NOT is_deleted
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok((total, passed))
    }
}
