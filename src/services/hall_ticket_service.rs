//! Hall ticket service
//!
//! The QR code PNG is generated once at creation; updates never refresh it,
//! even when the ticket number changes.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::StorageConfig,
    constants::audit_actions,
    db::repositories::{ExamRepository, HallTicketRepository, StudentRepository},
    error::{AppError, AppResult},
    handlers::hall_tickets::request::{CreateHallTicketRequest, UpdateHallTicketRequest},
    models::HallTicketDetail,
    services::audit_service::{changes_json, AuditContext, AuditService},
    utils::qr::write_ticket_qr,
};

const MODEL_NAME: &str = "HallTicket";

/// Hall ticket service
pub struct HallTicketService;

impl HallTicketService {
    /// Create a hall ticket and render its QR code
    pub async fn create(
        pool: &PgPool,
        storage: &StorageConfig,
        ctx: &AuditContext,
        payload: CreateHallTicketRequest,
    ) -> AppResult<HallTicketDetail> {
        Self::check_references(pool, Some(&payload.student_id), Some(&payload.exam_id)).await?;

        if HallTicketRepository::number_exists(pool, &payload.hall_ticket_number, None).await? {
            return Err(AppError::field(
                "hall_ticket_number",
                "Hall Ticket Number already exists",
            ));
        }

        if HallTicketRepository::student_exam_exists(pool, &payload.student_id, &payload.exam_id, None)
            .await?
        {
            return Err(AppError::validation(
                "Hall ticket already issued for this student and exam",
            ));
        }

        let qr_code = write_ticket_qr(storage, &payload.hall_ticket_number)?;

        let ticket = HallTicketRepository::create(
            pool,
            &payload.student_id,
            &payload.exam_id,
            &payload.hall_ticket_number,
            Utc::now().date_naive(),
            Some(&qr_code),
            payload.photo_url.as_deref(),
        )
        .await?;

        AuditService::record(
            pool,
            ctx,
            audit_actions::CREATE,
            MODEL_NAME,
            Some(&ticket.id),
            changes_json(&payload),
        )
        .await?;

        Self::detail(pool, &ticket.id).await
    }

    /// Get one hall ticket with student and exam names
    pub async fn get(pool: &PgPool, id: &Uuid) -> AppResult<HallTicketDetail> {
        Self::detail(pool, id).await
    }

    /// List hall tickets
    pub async fn list(
        pool: &PgPool,
        student_id: Option<&Uuid>,
        exam_id: Option<&Uuid>,
        search: Option<&str>,
    ) -> AppResult<Vec<HallTicketDetail>> {
        HallTicketRepository::list(pool, student_id, exam_id, search).await
    }

    /// All hall tickets belonging to one student
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: &Uuid,
    ) -> AppResult<Vec<HallTicketDetail>> {
        StudentRepository::find_by_id(pool, student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        HallTicketRepository::find_by_student(pool, student_id).await
    }

    /// Update a hall ticket
    pub async fn update(
        pool: &PgPool,
        ctx: &AuditContext,
        id: &Uuid,
        payload: UpdateHallTicketRequest,
    ) -> AppResult<HallTicketDetail> {
        let existing = HallTicketRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hall ticket not found".to_string()))?;

        Self::check_references(pool, payload.student_id.as_ref(), payload.exam_id.as_ref())
            .await?;

        if let Some(number) = payload.hall_ticket_number.as_deref() {
            if HallTicketRepository::number_exists(pool, number, Some(id)).await? {
                return Err(AppError::field(
                    "hall_ticket_number",
                    "Hall Ticket Number already exists",
                ));
            }
        }

        let student_id = payload.student_id.unwrap_or(existing.student_id);
        let exam_id = payload.exam_id.unwrap_or(existing.exam_id);
        if HallTicketRepository::student_exam_exists(pool, &student_id, &exam_id, Some(id)).await? {
            return Err(AppError::validation(
                "Hall ticket already issued for this student and exam",
            ));
        }

        let updated = HallTicketRepository::update(
            pool,
            id,
            payload.student_id.as_ref(),
            payload.exam_id.as_ref(),
            payload.hall_ticket_number.as_deref(),
            payload.photo_url.as_deref(),
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

    /// Soft-delete a hall ticket
    pub async fn delete(pool: &PgPool, ctx: &AuditContext, id: &Uuid) -> AppResult<()> {
        if !HallTicketRepository::soft_delete(pool, id).await? {
            return Err(AppError::NotFound("Hall ticket not found".to_string()));
        }

        AuditService::record(pool, ctx, audit_actions::DELETE, MODEL_NAME, Some(id), None).await?;

        Ok(())
    }

    async fn check_references(
        pool: &PgPool,
        student_id: Option<&Uuid>,
        exam_id: Option<&Uuid>,
    ) -> AppResult<()> {
        if let Some(student_id) = student_id {
            if StudentRepository::find_by_id(pool, student_id).await?.is_none() {
                return Err(AppError::field("student_id", "Student not found"));
            }
        }

        if let Some(exam_id) = exam_id {
            if ExamRepository::find_by_id(pool, exam_id).await?.is_none() {
                return Err(AppError::field("exam_id", "Exam not found"));
            }
        }

        Ok(())
    }

    async fn detail(pool: &PgPool, id: &Uuid) -> AppResult<HallTicketDetail> {
        HallTicketRepository::find_detail_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hall ticket not found".to_string()))
    }
}
