//! Course service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::audit_actions,
    db::repositories::{CourseRepository, DepartmentRepository, StaffRepository},
    error::{AppError, AppResult},
    handlers::courses::request::{CreateCourseRequest, UpdateCourseRequest},
    models::CourseDetail,
    services::audit_service::{changes_json, AuditContext, AuditService},
};

const MODEL_NAME: &str = "Course";

/// Course service
pub struct CourseService;

impl CourseService {
    /// Create a course
    pub async fn create(
        pool: &PgPool,
        ctx: &AuditContext,
        payload: CreateCourseRequest,
    ) -> AppResult<CourseDetail> {
        if CourseRepository::code_exists(pool, &payload.course_code, None).await? {
            return Err(AppError::field("course_code", "Course Code already exists"));
        }

        Self::check_references(pool, payload.department_id.as_ref(), payload.assigned_faculty.as_ref())
            .await?;

        let course = CourseRepository::create(
            pool,
            &payload.course_code,
            &payload.course_name,
            payload.department_id.as_ref(),
            payload.credits,
            payload.semester,
            payload.assigned_faculty.as_ref(),
        )
        .await?;

        AuditService::record(
            pool,
            ctx,
            audit_actions::CREATE,
            MODEL_NAME,
            Some(&course.id),
            changes_json(&payload),
        )
        .await?;

        Self::detail(pool, &course.id).await
    }

    /// Get one course with joined display names
    pub async fn get(pool: &PgPool, id: &Uuid) -> AppResult<CourseDetail> {
        Self::detail(pool, id).await
    }

    /// List courses
    pub async fn list(
        pool: &PgPool,
        department_id: Option<&Uuid>,
        semester: Option<i32>,
        assigned_faculty: Option<&Uuid>,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> AppResult<Vec<CourseDetail>> {
        CourseRepository::list(pool, department_id, semester, assigned_faculty, search, ordering)
            .await
    }

    /// Update a course
    pub async fn update(
        pool: &PgPool,
        ctx: &AuditContext,
        id: &Uuid,
        payload: UpdateCourseRequest,
    ) -> AppResult<CourseDetail> {
        CourseRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if let Some(code) = payload.course_code.as_deref() {
            if CourseRepository::code_exists(pool, code, Some(id)).await? {
                return Err(AppError::field("course_code", "Course Code already exists"));
            }
        }

        Self::check_references(pool, payload.department_id.as_ref(), payload.assigned_faculty.as_ref())
            .await?;

        let updated = CourseRepository::update(
            pool,
            id,
            payload.course_code.as_deref(),
            payload.course_name.as_deref(),
            payload.department_id.as_ref(),
            payload.credits,
            payload.semester,
            payload.assigned_faculty.as_ref(),
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

    /// Soft-delete a course
    pub async fn delete(pool: &PgPool, ctx: &AuditContext, id: &Uuid) -> AppResult<()> {
        if !CourseRepository::soft_delete(pool, id).await? {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        AuditService::record(pool, ctx, audit_actions::DELETE, MODEL_NAME, Some(id), None).await?;

        Ok(())
    }

    async fn check_references(
        pool: &PgPool,
        department_id: Option<&Uuid>,
        assigned_faculty: Option<&Uuid>,
    ) -> AppResult<()> {
        if let Some(department_id) = department_id {
            if DepartmentRepository::find_by_id(pool, department_id).await?.is_none() {
                return Err(AppError::field("department_id", "Department not found"));
            }
        }

        if let Some(assigned_faculty) = assigned_faculty {
            if StaffRepository::find_by_id(pool, assigned_faculty).await?.is_none() {
                return Err(AppError::field("assigned_faculty", "Staff member not found"));
            }
        }

        Ok(())
    }

    async fn detail(pool: &PgPool, id: &Uuid) -> AppResult<CourseDetail> {
        CourseRepository::find_detail_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }
}
