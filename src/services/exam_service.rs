//! Exam service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::audit_actions,
    db::repositories::{DepartmentRepository, ExamRepository},
    error::{AppError, AppResult},
    handlers::exams::request::{CreateExamRequest, UpdateExamRequest},
    models::ExamDetail,
    services::audit_service::{changes_json, AuditContext, AuditService},
    utils::validation::validate_exam_type,
};

const MODEL_NAME: &str = "Exam";

/// Exam service
pub struct ExamService;

impl ExamService {
    /// Create an exam
    pub async fn create(
        pool: &PgPool,
        ctx: &AuditContext,
        payload: CreateExamRequest,
    ) -> AppResult<ExamDetail> {
        validate_exam_type(&payload.exam_type)
            .map_err(|msg| AppError::field("exam_type", msg))?;
        Self::check_department(pool, payload.department_id.as_ref()).await?;

        let exam = ExamRepository::create(
            pool,
            &payload.exam_name,
            &payload.exam_type,
            payload.exam_date,
            payload.duration,
            payload.total_marks,
            payload.semester,
            payload.department_id.as_ref(),
        )
        .await?;

        AuditService::record(
            pool,
            ctx,
            audit_actions::CREATE,
            MODEL_NAME,
            Some(&exam.id),
            changes_json(&payload),
        )
        .await?;

        Self::detail(pool, &exam.id).await
    }

    /// Get one exam with department name
    pub async fn get(pool: &PgPool, id: &Uuid) -> AppResult<ExamDetail> {
        Self::detail(pool, id).await
    }

    /// List exams
    pub async fn list(
        pool: &PgPool,
        exam_type: Option<&str>,
        semester: Option<i32>,
        department_id: Option<&Uuid>,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> AppResult<Vec<ExamDetail>> {
        ExamRepository::list(pool, exam_type, semester, department_id, search, ordering).await
    }

    /// Update an exam
    pub async fn update(
        pool: &PgPool,
        ctx: &AuditContext,
        id: &Uuid,
        payload: UpdateExamRequest,
    ) -> AppResult<ExamDetail> {
        ExamRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Exam not found".to_string()))?;

        if let Some(exam_type) = payload.exam_type.as_deref() {
            validate_exam_type(exam_type).map_err(|msg| AppError::field("exam_type", msg))?;
        }
        Self::check_department(pool, payload.department_id.as_ref()).await?;

        let updated = ExamRepository::update(
            pool,
            id,
            payload.exam_name.as_deref(),
            payload.exam_type.as_deref(),
            payload.exam_date,
            payload.duration,
            payload.total_marks,
            payload.semester,
            payload.department_id.as_ref(),
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

    /// Soft-delete an exam
    pub async fn delete(pool: &PgPool, ctx: &AuditContext, id: &Uuid) -> AppResult<()> {
        if !ExamRepository::soft_delete(pool, id).await? {
            return Err(AppError::NotFound("Exam not found".to_string()));
        }

        AuditService::record(pool, ctx, audit_actions::DELETE, MODEL_NAME, Some(id), None).await?;

        Ok(())
    }

    async fn check_department(pool: &PgPool, department_id: Option<&Uuid>) -> AppResult<()> {
        if let Some(department_id) = department_id {
            if DepartmentRepository::find_by_id(pool, department_id).await?.is_none() {
                return Err(AppError::field("department_id", "Department not found"));
            }
        }

        Ok(())
    }

    async fn detail(pool: &PgPool, id: &Uuid) -> AppResult<ExamDetail> {
        ExamRepository::find_detail_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Exam not found".to_string()))
    }
}
