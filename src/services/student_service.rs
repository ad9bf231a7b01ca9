//! Student service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::audit_actions,
    db::repositories::{DepartmentRepository, StudentRepository},
    error::{AppError, AppResult},
    handlers::students::request::{CreateStudentRequest, ListStudentsQuery, UpdateStudentRequest},
    models::StudentDetail,
    services::audit_service::{changes_json, AuditContext, AuditService},
    utils::validation::{validate_phone, validate_student_status},
};

const MODEL_NAME: &str = "Student";

/// Student service
pub struct StudentService;

impl StudentService {
    /// Create a student
    pub async fn create(
        pool: &PgPool,
        ctx: &AuditContext,
        payload: CreateStudentRequest,
    ) -> AppResult<StudentDetail> {
        validate_phone(&payload.phone).map_err(|msg| AppError::field("phone", msg))?;
        if let Some(status) = payload.status.as_deref() {
            validate_student_status(status).map_err(|msg| AppError::field("status", msg))?;
        }

        Self::check_unique(
            pool,
            Some(&payload.student_id),
            Some(&payload.register_no),
            Some(&payload.email),
            Some(&payload.phone),
            None,
        )
        .await?;
        Self::check_department(pool, payload.department_id.as_ref()).await?;

        let student = StudentRepository::create(
            pool,
            payload.user_id.as_ref(),
            &payload.student_id,
            &payload.full_name,
            &payload.register_no,
            payload.department_id.as_ref(),
            payload.year,
            payload.semester,
            &payload.email,
            &payload.phone,
            &payload.address,
            payload.status.as_deref().unwrap_or("active"),
        )
        .await?;

        AuditService::record(
            pool,
            ctx,
            audit_actions::CREATE,
            MODEL_NAME,
            Some(&student.id),
            changes_json(&payload),
        )
        .await?;

        Self::detail(pool, &student.id).await
    }

    /// Get one student with department name
    pub async fn get(pool: &PgPool, id: &Uuid) -> AppResult<StudentDetail> {
        Self::detail(pool, id).await
    }

    /// List students
    pub async fn list(pool: &PgPool, query: &ListStudentsQuery) -> AppResult<Vec<StudentDetail>> {
        StudentRepository::list(
            pool,
            query.department.as_ref(),
            query.semester,
            query.year,
            query.status.as_deref(),
            query.search.as_deref(),
            query.ordering.as_deref(),
        )
        .await
    }

    /// Update a student
    pub async fn update(
        pool: &PgPool,
        ctx: &AuditContext,
        id: &Uuid,
        payload: UpdateStudentRequest,
    ) -> AppResult<StudentDetail> {
        StudentRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        if let Some(phone) = payload.phone.as_deref() {
            validate_phone(phone).map_err(|msg| AppError::field("phone", msg))?;
        }
        if let Some(status) = payload.status.as_deref() {
            validate_student_status(status).map_err(|msg| AppError::field("status", msg))?;
        }

        Self::check_unique(
            pool,
            payload.student_id.as_deref(),
            payload.register_no.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
            Some(id),
        )
        .await?;
        Self::check_department(pool, payload.department_id.as_ref()).await?;

        let updated = StudentRepository::update(
            pool,
            id,
            payload.student_id.as_deref(),
            payload.full_name.as_deref(),
            payload.register_no.as_deref(),
            payload.department_id.as_ref(),
            payload.year,
            payload.semester,
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.address.as_deref(),
            payload.status.as_deref(),
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

    /// Soft-delete a student
    pub async fn delete(pool: &PgPool, ctx: &AuditContext, id: &Uuid) -> AppResult<()> {
        if !StudentRepository::soft_delete(pool, id).await? {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        AuditService::record(pool, ctx, audit_actions::DELETE, MODEL_NAME, Some(id), None).await?;

        Ok(())
    }

    async fn check_unique(
        pool: &PgPool,
        student_id: Option<&str>,
        register_no: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        exclude: Option<&Uuid>,
    ) -> AppResult<()> {
        if let Some(student_id) = student_id {
            if StudentRepository::student_id_exists(pool, student_id, exclude).await? {
                return Err(AppError::field("student_id", "Student ID already exists"));
            }
        }

        if let Some(register_no) = register_no {
            if StudentRepository::register_no_exists(pool, register_no, exclude).await? {
                return Err(AppError::field(
                    "register_no",
                    "Register Number already exists",
                ));
            }
        }

        if let Some(email) = email {
            if StudentRepository::email_exists(pool, email, exclude).await? {
                return Err(AppError::field("email", "Email already exists"));
            }
        }

        if let Some(phone) = phone {
            if StudentRepository::phone_exists(pool, phone, exclude).await? {
                return Err(AppError::field("phone", "Phone number already exists"));
            }
        }

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

    async fn detail(pool: &PgPool, id: &Uuid) -> AppResult<StudentDetail> {
        StudentRepository::find_detail_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }
}
