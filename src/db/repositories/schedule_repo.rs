//! Exam schedule repository

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{ExamSchedule, ExamScheduleDetail},
};

use super::order_by;

const DETAIL_SELECT: &str = r#"
    SELECT es.id, es.exam_id, e.exam_name, es.subject_id,
           c.course_name AS subject_name, es.date, es.start_time, es.end_time,
           es.hall_number, es.invigilator, st.name AS invigilator_name,
           es.created_at, es.updated_at
    FROM exam_schedules es
    JOIN exams e ON e.id = es.exam_id
    JOIN courses c ON c.id = es.subject_id
    LEFT JOIN staff st ON st.id = es.invigilator AND NOT st.is_deleted
"#;

/// Repository for exam schedule database operations
pub struct ScheduleRepository;

impl ScheduleRepository {
    /// Create a new schedule entry
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        exam_id: &Uuid,
        subject_id: &Uuid,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        hall_number: &str,
        invigilator: Option<&Uuid>,
    ) -> AppResult<ExamSchedule> {
        let schedule = sqlx::query_as::<_, ExamSchedule>(
            r#"
            INSERT INTO exam_schedules (
                exam_id, subject_id, date, start_time, end_time, hall_number,
                invigilator
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(exam_id)
        .bind(subject_id)
        .bind(date)
        .bind(start_time)
        .bind(end_time)
        .bind(hall_number)
        .bind(invigilator)
        .fetch_one(pool)
        .await?;

        Ok(schedule)
    }

    /// Find a live schedule entry by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<ExamSchedule>> {
        let schedule = sqlx::query_as::<_, ExamSchedule>(
            r#"SELECT * FROM exam_schedules WHERE id = $1 AND NOT is_deleted"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(schedule)
    }

    /// Find a live schedule entry with joined display names
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: &Uuid,
    ) -> AppResult<Option<ExamScheduleDetail>> {
        let sql = format!("{DETAIL_SELECT} WHERE es.id = $1 AND NOT es.is_deleted");

        let detail = sqlx::query_as::<_, ExamScheduleDetail>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(detail)
    }

    /// List live schedule entries with equality filters, search and ordering
    pub async fn list(
        pool: &PgPool,
        exam_id: Option<&Uuid>,
        subject_id: Option<&Uuid>,
        date: Option<NaiveDate>,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> AppResult<Vec<ExamScheduleDetail>> {
        let order = order_by(ordering, &["date", "start_time"], "date ASC, es.start_time ASC");
        let sql = format!(
            r#"{DETAIL_SELECT}
            WHERE NOT es.is_deleted
              AND ($1::uuid IS NULL OR es.exam_id = $1)
              AND ($2::uuid IS NULL OR es.subject_id = $2)
              AND ($3::date IS NULL OR es.date = $3)
              AND ($4::text IS NULL OR es.hall_number ILIKE $4)
            ORDER BY es.{order}"#
        );

        let schedules = sqlx::query_as::<_, ExamScheduleDetail>(&sql)
            .bind(exam_id)
            .bind(subject_id)
            .bind(date)
            .bind(search.map(|s| format!("%{}%", s)))
            .fetch_all(pool)
            .await?;

        Ok(schedules)
    }

    /// Fetch all live schedule entries for a hall on a date
    ///
    /// Used by the conflict checker; `exclude` removes the row being updated
    /// so it does not clash with itself.
    pub async fn find_for_hall_and_date(
        pool: &PgPool,
        hall_number: &str,
        date: NaiveDate,
        exclude: Option<&Uuid>,
    ) -> AppResult<Vec<ExamSchedule>> {
        let schedules = sqlx::query_as::<_, ExamSchedule>(
            r#"
            SELECT * FROM exam_schedules
            WHERE hall_number = $1 AND date = $2 AND NOT is_deleted
              AND ($3::uuid IS NULL OR id <> $3)
            "#,
        )
        .bind(hall_number)
        .bind(date)
        .bind(exclude)
        .fetch_all(pool)
        .await?;

        Ok(schedules)
    }

    /// Check whether an (exam, subject, date, start_time) slot already exists
    pub async fn slot_exists(
        pool: &PgPool,
        exam_id: &Uuid,
        subject_id: &Uuid,
        date: NaiveDate,
        start_time: NaiveTime,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM exam_schedules
                WHERE exam_id = $1 AND subject_id = $2 AND date = $3
                  AND start_time = $4 AND NOT is_deleted
                  AND ($5::uuid IS NULL OR id <> $5)
            )
            "#,
        )
        .bind(exam_id)
        .bind(subject_id)
        .bind(date)
        .bind(start_time)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Update a schedule entry; absent values keep their current value
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        exam_id: Option<&Uuid>,
        subject_id: Option<&Uuid>,
        date: Option<NaiveDate>,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
        hall_number: Option<&str>,
        invigilator: Option<&Uuid>,
    ) -> AppResult<ExamSchedule> {
        let schedule = sqlx::query_as::<_, ExamSchedule>(
            r#"
            UPDATE exam_schedules
            SET exam_id = COALESCE($2, exam_id),
                subject_id = COALESCE($3, subject_id),
                date = COALESCE($4, date),
                start_time = COALESCE($5, start_time),
                end_time = COALESCE($6, end_time),
                hall_number = COALESCE($7, hall_number),
                invigilator = COALESCE($8, invigilator),
                updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(exam_id)
        .bind(subject_id)
        .bind(date)
        .bind(start_time)
        .bind(end_time)
        .bind(hall_number)
        .bind(invigilator)
        .fetch_one(pool)
        .await?;

        Ok(schedule)
    }

    /// Soft-delete a schedule entry; returns false if it was already gone
    pub async fn soft_delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE exam_schedules SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
