//! Exam repository

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Exam, ExamDetail},
};

use super::order_by;

const DETAIL_SELECT: &str = r#"
    SELECT e.id, e.exam_name, e.exam_type, e.exam_date, e.duration,
           e.total_marks, e.semester, e.department_id, d.department_name,
           e.created_at, e.updated_at
    FROM exams e
    LEFT JOIN departments d ON d.id = e.department_id AND NOT d.is_deleted
"#;

/// Repository for exam database operations
pub struct ExamRepository;

impl ExamRepository {
    /// Create a new exam
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        exam_name: &str,
        exam_type: &str,
        exam_date: NaiveDate,
        duration: i32,
        total_marks: i32,
        semester: i32,
        department_id: Option<&Uuid>,
    ) -> AppResult<Exam> {
        let exam = sqlx::query_as::<_, Exam>(
            r#"
            INSERT INTO exams (
                exam_name, exam_type, exam_date, duration, total_marks,
                semester, department_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(exam_name)
        .bind(exam_type)
        .bind(exam_date)
        .bind(duration)
        .bind(total_marks)
        .bind(semester)
        .bind(department_id)
        .fetch_one(pool)
        .await?;

        Ok(exam)
    }

    /// Find a live exam by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Exam>> {
        let exam =
            sqlx::query_as::<_, Exam>(r#"SELECT * FROM exams WHERE id = $1 AND NOT is_deleted"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(exam)
    }

    /// Find a live exam with its department name
    pub async fn find_detail_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<ExamDetail>> {
        let sql = format!("{DETAIL_SELECT} WHERE e.id = $1 AND NOT e.is_deleted");

        let detail = sqlx::query_as::<_, ExamDetail>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(detail)
    }

    /// List live exams with equality filters, search and ordering
    pub async fn list(
        pool: &PgPool,
        exam_type: Option<&str>,
        semester: Option<i32>,
        department_id: Option<&Uuid>,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> AppResult<Vec<ExamDetail>> {
        let order = order_by(ordering, &["exam_date", "created_at"], "exam_date DESC");
        let sql = format!(
            r#"{DETAIL_SELECT}
            WHERE NOT e.is_deleted
              AND ($1::text IS NULL OR e.exam_type = $1)
              AND ($2::int IS NULL OR e.semester = $2)
              AND ($3::uuid IS NULL OR e.department_id = $3)
              AND ($4::text IS NULL OR e.exam_name ILIKE $4)
            ORDER BY e.{order}"#
        );

        let exams = sqlx::query_as::<_, ExamDetail>(&sql)
            .bind(exam_type)
            .bind(semester)
            .bind(department_id)
            .bind(search.map(|s| format!("%{}%", s)))
            .fetch_all(pool)
            .await?;

        Ok(exams)
    }

    /// Update an exam; absent values keep their current value
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        exam_name: Option<&str>,
        exam_type: Option<&str>,
        exam_date: Option<NaiveDate>,
        duration: Option<i32>,
        total_marks: Option<i32>,
        semester: Option<i32>,
        department_id: Option<&Uuid>,
    ) -> AppResult<Exam> {
        let exam = sqlx::query_as::<_, Exam>(
            r#"
            UPDATE exams
            SET exam_name = COALESCE($2, exam_name),
                exam_type = COALESCE($3, exam_type),
                exam_date = COALESCE($4, exam_date),
                duration = COALESCE($5, duration),
                total_marks = COALESCE($6, total_marks),
                semester = COALESCE($7, semester),
                department_id = COALESCE($8, department_id),
                updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(exam_name)
        .bind(exam_type)
        .bind(exam_date)
        .bind(duration)
        .bind(total_marks)
        .bind(semester)
        .bind(department_id)
        .fetch_one(pool)
        .await?;

        Ok(exam)
    }

    /// Soft-delete an exam; returns false if it was already gone
    pub async fn soft_delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE exams SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count live exams dated within `[today, today + days]` (dashboard)
    pub async fn count_upcoming(pool: &PgPool, today: NaiveDate, days: i64) -> AppResult<i64> {
        let until = today + chrono::Duration::days(days);

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM exams
            WHERE NOT is_deleted AND exam_date >= $1 AND exam_date <= $2
            "#,
        )
        .bind(today)
        .bind(until)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
