//! Result service
//!
//! Result rows are caller-provided in full; percentage and CGPA are not
//! derived here (results processing is a manual step upstream).

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::audit_actions,
    db::repositories::{ExamRepository, ResultRepository, StudentRepository},
    error::{AppError, AppResult},
    handlers::results::request::{CreateResultRequest, UpdateResultRequest},
    models::ExamResultDetail,
    services::audit_service::{changes_json, AuditContext, AuditService},
    utils::validation::validate_result_status,
};

const MODEL_NAME: &str = "Result";

/// Result service
pub struct ResultService;

impl ResultService {
    /// Create a result
    pub async fn create(
        pool: &PgPool,
        ctx: &AuditContext,
        payload: CreateResultRequest,
    ) -> AppResult<ExamResultDetail> {
        validate_result_status(&payload.result_status)
            .map_err(|msg| AppError::field("result_status", msg))?;
        Self::check_references(pool, Some(&payload.student_id), Some(&payload.exam_id)).await?;

        if ResultRepository::student_exam_exists(pool, &payload.student_id, &payload.exam_id, None)
            .await?
        {
            return Err(AppError::validation(
                "Result already published for this student and exam",
            ));
        }

        let result = ResultRepository::create(
            pool,
            &payload.student_id,
            &payload.exam_id,
            payload.total_marks,
            payload.percentage,
            payload.cgpa,
            &payload.result_status,
        )
        .await?;

        AuditService::record(
            pool,
            ctx,
            audit_actions::CREATE,
            MODEL_NAME,
            Some(&result.id),
            changes_json(&payload),
        )
        .await?;

        Self::detail(pool, &result.id).await
    }

    /// Get one result with student and exam names
    pub async fn get(pool: &PgPool, id: &Uuid) -> AppResult<ExamResultDetail> {
        Self::detail(pool, id).await
    }

    /// List results
    pub async fn list(
        pool: &PgPool,
        student_id: Option<&Uuid>,
        exam_id: Option<&Uuid>,
        result_status: Option<&str>,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> AppResult<Vec<ExamResultDetail>> {
        ResultRepository::list(pool, student_id, exam_id, result_status, search, ordering).await
    }

    /// All results belonging to one student
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: &Uuid,
    ) -> AppResult<Vec<ExamResultDetail>> {
        StudentRepository::find_by_id(pool, student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        ResultRepository::find_by_student(pool, student_id).await
    }

    /// Update a result
    pub async fn update(
        pool: &PgPool,
        ctx: &AuditContext,
        id: &Uuid,
        payload: UpdateResultRequest,
    ) -> AppResult<ExamResultDetail> {
        let existing = ResultRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Result not found".to_string()))?;

        if let Some(result_status) = payload.result_status.as_deref() {
            validate_result_status(result_status)
                .map_err(|msg| AppError::field("result_status", msg))?;
        }
        Self::check_references(pool, payload.student_id.as_ref(), payload.exam_id.as_ref())
            .await?;

        let student_id = payload.student_id.unwrap_or(existing.student_id);
        let exam_id = payload.exam_id.unwrap_or(existing.exam_id);
        if ResultRepository::student_exam_exists(pool, &student_id, &exam_id, Some(id)).await? {
            return Err(AppError::validation(
                "Result already published for this student and exam",
            ));
        }

        let updated = ResultRepository::update(
            pool,
            id,
            payload.student_id.as_ref(),
            payload.exam_id.as_ref(),
            payload.total_marks,
            payload.percentage,
            payload.cgpa,
            payload.result_status.as_deref(),
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

    /// Soft-delete a result
    pub async fn delete(pool: &PgPool, ctx: &AuditContext, id: &Uuid) -> AppResult<()> {
        if !ResultRepository::soft_delete(pool, id).await? {
            return Err(AppError::NotFound("Result not found".to_string()));
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

    async fn detail(pool: &PgPool, id: &Uuid) -> AppResult<ExamResultDetail> {
        ResultRepository::find_detail_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Result not found".to_string()))
    }
}
