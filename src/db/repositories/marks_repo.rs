//! Marks entry repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{MarksEntry, MarksEntryDetail},
};

use super::order_by;

const DETAIL_SELECT: &str = r#"
    SELECT m.id, m.student_id, s.full_name AS student_name, m.subject_id,
           c.course_name AS subject_name, m.exam_id, e.exam_name,
           m.internal_marks, m.external_marks, m.total_marks, m.grade,
           m.remarks, m.created_at, m.updated_at
    FROM marks_entries m
    JOIN students s ON s.id = m.student_id
    JOIN courses c ON c.id = m.subject_id
    JOIN exams e ON e.id = m.exam_id
"#;

/// Repository for marks entry database operations
///
/// `total_marks` and `grade` arrive pre-computed from the marks service;
/// this layer never derives them.
pub struct MarksRepository;

impl MarksRepository {
    /// Create a new marks entry
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        student_id: &Uuid,
        subject_id: &Uuid,
        exam_id: &Uuid,
        internal_marks: i32,
        external_marks: i32,
        total_marks: i32,
        grade: &str,
        remarks: Option<&str>,
    ) -> AppResult<MarksEntry> {
        let entry = sqlx::query_as::<_, MarksEntry>(
            r#"
            INSERT INTO marks_entries (
                student_id, subject_id, exam_id, internal_marks,
                external_marks, total_marks, grade, remarks
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(student_id)
        .bind(subject_id)
        .bind(exam_id)
        .bind(internal_marks)
        .bind(external_marks)
        .bind(total_marks)
        .bind(grade)
        .bind(remarks)
        .fetch_one(pool)
        .await?;

        Ok(entry)
    }

    /// Find a live marks entry by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<MarksEntry>> {
        let entry = sqlx::query_as::<_, MarksEntry>(
            r#"SELECT * FROM marks_entries WHERE id = $1 AND NOT is_deleted"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(entry)
    }

    /// Find a live marks entry with joined display names
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: &Uuid,
    ) -> AppResult<Option<MarksEntryDetail>> {
        let sql = format!("{DETAIL_SELECT} WHERE m.id = $1 AND NOT m.is_deleted");

        let detail = sqlx::query_as::<_, MarksEntryDetail>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(detail)
    }

    /// List live marks entries with equality filters, search and ordering
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
        let order = order_by(ordering, &["total_marks", "created_at"], "created_at DESC");
        let sql = format!(
            r#"{DETAIL_SELECT}
            WHERE NOT m.is_deleted
              AND ($1::uuid IS NULL OR m.student_id = $1)
              AND ($2::uuid IS NULL OR m.subject_id = $2)
              AND ($3::uuid IS NULL OR m.exam_id = $3)
              AND ($4::text IS NULL OR m.grade = $4)
              AND ($5::text IS NULL OR s.full_name ILIKE $5 OR c.course_name ILIKE $5)
            ORDER BY m.{order}"#
        );

        let entries = sqlx::query_as::<_, MarksEntryDetail>(&sql)
            .bind(student_id)
            .bind(subject_id)
            .bind(exam_id)
            .bind(grade)
            .bind(search.map(|s| format!("%{}%", s)))
            .fetch_all(pool)
            .await?;

        Ok(entries)
    }

    /// Update a marks entry with freshly derived totals
    ///
    /// `total_marks` and `grade` are always rewritten; the component marks
    /// and references keep their current value when absent.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        student_id: Option<&Uuid>,
        subject_id: Option<&Uuid>,
        exam_id: Option<&Uuid>,
        internal_marks: Option<i32>,
        external_marks: Option<i32>,
        total_marks: i32,
        grade: &str,
        remarks: Option<&str>,
    ) -> AppResult<MarksEntry> {
        let entry = sqlx::query_as::<_, MarksEntry>(
            r#"
            UPDATE marks_entries
            SET student_id = COALESCE($2, student_id),
                subject_id = COALESCE($3, subject_id),
                exam_id = COALESCE($4, exam_id),
                internal_marks = COALESCE($5, internal_marks),
                external_marks = COALESCE($6, external_marks),
                total_marks = $7,
                grade = $8,
                remarks = COALESCE($9, remarks),
                updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(student_id)
        .bind(subject_id)
        .bind(exam_id)
        .bind(internal_marks)
        .bind(external_marks)
        .bind(total_marks)
        .bind(grade)
        .bind(remarks)
        .fetch_one(pool)
        .await?;

        Ok(entry)
    }

    /// Soft-delete a marks entry; returns false if it was already gone
    pub async fn soft_delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE marks_entries SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether a (student, subject, exam) entry already exists
    pub async fn entry_exists(
        pool: &PgPool,
        student_id: &Uuid,
        subject_id: &Uuid,
        exam_id: &Uuid,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM marks_entries
                WHERE student_id = $1 AND subject_id = $2 AND exam_id = $3
                  AND NOT is_deleted AND ($4::uuid IS NULL OR id <> $4)
            )
            "#,
        )
        .bind(student_id)
        .bind(subject_id)
        .bind(exam_id)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
