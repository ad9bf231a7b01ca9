//! Department service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::audit_actions,
    db::repositories::DepartmentRepository,
    error::{AppError, AppResult},
    handlers::departments::request::{CreateDepartmentRequest, UpdateDepartmentRequest},
    models::DepartmentDetail,
    services::audit_service::{changes_json, AuditContext, AuditService},
};

const MODEL_NAME: &str = "Department";

/// Department service
pub struct DepartmentService;

impl DepartmentService {
    /// Create a department
    pub async fn create(
        pool: &PgPool,
        ctx: &AuditContext,
        payload: CreateDepartmentRequest,
    ) -> AppResult<DepartmentDetail> {
        if DepartmentRepository::code_exists(pool, &payload.department_code, None).await? {
            return Err(AppError::field(
                "department_code",
                "Department Code already exists",
            ));
        }

        if DepartmentRepository::name_exists(pool, &payload.department_name, None).await? {
            return Err(AppError::field(
                "department_name",
                "Department Name already exists",
            ));
        }

        let department = DepartmentRepository::create(
            pool,
            &payload.department_name,
            &payload.department_code,
            payload.hod.as_deref(),
            payload.description.as_deref(),
        )
        .await?;

        AuditService::record(
            pool,
            ctx,
            audit_actions::CREATE,
            MODEL_NAME,
            Some(&department.id),
            changes_json(&payload),
        )
        .await?;

        Self::detail(pool, &department.id).await
    }

    /// Get one department with membership counts
    pub async fn get(pool: &PgPool, id: &Uuid) -> AppResult<DepartmentDetail> {
        Self::detail(pool, id).await
    }

    /// List departments
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> AppResult<Vec<DepartmentDetail>> {
        DepartmentRepository::list(pool, search, ordering).await
    }

    /// Update a department
    pub async fn update(
        pool: &PgPool,
        ctx: &AuditContext,
        id: &Uuid,
        payload: UpdateDepartmentRequest,
    ) -> AppResult<DepartmentDetail> {
        DepartmentRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

        if let Some(code) = payload.department_code.as_deref() {
            if DepartmentRepository::code_exists(pool, code, Some(id)).await? {
                return Err(AppError::field(
                    "department_code",
                    "Department Code already exists",
                ));
            }
        }

        if let Some(name) = payload.department_name.as_deref() {
            if DepartmentRepository::name_exists(pool, name, Some(id)).await? {
                return Err(AppError::field(
                    "department_name",
                    "Department Name already exists",
                ));
            }
        }

        let updated = DepartmentRepository::update(
            pool,
            id,
            payload.department_name.as_deref(),
            payload.department_code.as_deref(),
            payload.hod.as_deref(),
            payload.description.as_deref(),
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

    /// Soft-delete a department
    pub async fn delete(pool: &PgPool, ctx: &AuditContext, id: &Uuid) -> AppResult<()> {
        if !DepartmentRepository::soft_delete(pool, id).await? {
            return Err(AppError::NotFound("Department not found".to_string()));
        }

        AuditService::record(pool, ctx, audit_actions::DELETE, MODEL_NAME, Some(id), None).await?;

        Ok(())
    }

    async fn detail(pool: &PgPool, id: &Uuid) -> AppResult<DepartmentDetail> {
        DepartmentRepository::find_detail_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".to_string()))
    }
}
