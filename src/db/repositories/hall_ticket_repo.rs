//! Hall ticket repository

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{HallTicket, HallTicketDetail},
};

const DETAIL_SELECT: &str = r#"
    SELECT ht.id, ht.student_id, s.full_name AS student_name, s.register_no,
           ht.exam_id, e.exam_name, ht.hall_ticket_number, ht.issued_date,
           ht.qr_code, ht.photo_url, ht.created_at, ht.updated_at
    FROM hall_tickets ht
    JOIN students s ON s.id = ht.student_id
    JOIN exams e ON e.id = ht.exam_id
"#;

/// Repository for hall ticket database operations
pub struct HallTicketRepository;

impl HallTicketRepository {
    /// Create a new hall ticket
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        student_id: &Uuid,
        exam_id: &Uuid,
        hall_ticket_number: &str,
        issued_date: NaiveDate,
        qr_code: Option<&str>,
        photo_url: Option<&str>,
    ) -> AppResult<HallTicket> {
        let ticket = sqlx::query_as::<_, HallTicket>(
            r#"
            INSERT INTO hall_tickets (
                student_id, exam_id, hall_ticket_number, issued_date, qr_code,
                photo_url
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(student_id)
        .bind(exam_id)
        .bind(hall_ticket_number)
        .bind(issued_date)
        .bind(qr_code)
        .bind(photo_url)
        .fetch_one(pool)
        .await?;

        Ok(ticket)
    }

    /// Find a live hall ticket by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<HallTicket>> {
        let ticket = sqlx::query_as::<_, HallTicket>(
            r#"SELECT * FROM hall_tickets WHERE id = $1 AND NOT is_deleted"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(ticket)
    }

    /// Find a live hall ticket with student and exam names
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: &Uuid,
    ) -> AppResult<Option<HallTicketDetail>> {
        let sql = format!("{DETAIL_SELECT} WHERE ht.id = $1 AND NOT ht.is_deleted");

        let detail = sqlx::query_as::<_, HallTicketDetail>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(detail)
    }

    /// List live hall tickets with equality filters and search
    pub async fn list(
        pool: &PgPool,
        student_id: Option<&Uuid>,
        exam_id: Option<&Uuid>,
        search: Option<&str>,
    ) -> AppResult<Vec<HallTicketDetail>> {
        let sql = format!(
            r#"{DETAIL_SELECT}
            WHERE NOT ht.is_deleted
              AND ($1::uuid IS NULL OR ht.student_id = $1)
              AND ($2::uuid IS NULL OR ht.exam_id = $2)
              AND ($3::text IS NULL OR ht.hall_ticket_number ILIKE $3)
            ORDER BY ht.issued_date DESC"#
        );

        let tickets = sqlx::query_as::<_, HallTicketDetail>(&sql)
            .bind(student_id)
            .bind(exam_id)
            .bind(search.map(|s| format!("%{}%", s)))
            .fetch_all(pool)
            .await?;

        Ok(tickets)
    }

    /// All live hall tickets belonging to one student
    pub async fn find_by_student(
        pool: &PgPool,
        student_id: &Uuid,
    ) -> AppResult<Vec<HallTicketDetail>> {
        let sql = format!(
            r#"{DETAIL_SELECT}
            WHERE ht.student_id = $1 AND NOT ht.is_deleted
            ORDER BY ht.issued_date DESC"#
        );

        let tickets = sqlx::query_as::<_, HallTicketDetail>(&sql)
            .bind(student_id)
            .fetch_all(pool)
            .await?;

        Ok(tickets)
    }

    /// Update a hall ticket; absent values keep their current value
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        student_id: Option<&Uuid>,
        exam_id: Option<&Uuid>,
        hall_ticket_number: Option<&str>,
        photo_url: Option<&str>,
    ) -> AppResult<HallTicket> {
        let ticket = sqlx::query_as::<_, HallTicket>(
            r#"
            UPDATE hall_tickets
            SET student_id = COALESCE($2, student_id),
                exam_id = COALESCE($3, exam_id),
                hall_ticket_number = COALESCE($4, hall_ticket_number),
                photo_url = COALESCE($5, photo_url),
                updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(student_id)
        .bind(exam_id)
        .bind(hall_ticket_number)
        .bind(photo_url)
        .fetch_one(pool)
        .await?;

        Ok(ticket)
    }

    /// Soft-delete a hall ticket; returns false if it was already gone
    pub async fn soft_delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE hall_tickets SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether a ticket number is taken among live rows
    pub async fn number_exists(
        pool: &PgPool,
        hall_ticket_number: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM hall_tickets
                WHERE hall_ticket_number = $1 AND NOT is_deleted
                  AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(hall_ticket_number)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Check whether a (student, exam) pair already holds a live ticket
    pub async fn student_exam_exists(
        pool: &PgPool,
        student_id: &Uuid,
        exam_id: &Uuid,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM hall_tickets
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
}
