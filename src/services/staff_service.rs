//! Staff service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::audit_actions,
    db::repositories::{DepartmentRepository, StaffRepository},
    error::{AppError, AppResult},
    handlers::staff::request::{CreateStaffRequest, UpdateStaffRequest},
    models::StaffDetail,
    services::audit_service::{changes_json, AuditContext, AuditService},
    utils::validation::validate_phone,
};

const MODEL_NAME: &str = "Staff";

/// Staff service
pub struct StaffService;

impl StaffService {
    /// Create a staff member
    pub async fn create(
        pool: &PgPool,
        ctx: &AuditContext,
        payload: CreateStaffRequest,
    ) -> AppResult<StaffDetail> {
        validate_phone(&payload.phone).map_err(|msg| AppError::field("phone", msg))?;

        Self::check_unique(pool, Some(&payload.staff_id), Some(&payload.email), Some(&payload.phone), None)
            .await?;
        Self::check_department(pool, payload.department_id.as_ref()).await?;

        let staff = StaffRepository::create(
            pool,
            payload.user_id.as_ref(),
            &payload.staff_id,
            &payload.name,
            &payload.email,
            &payload.phone,
            payload.department_id.as_ref(),
            &payload.designation,
            &payload.qualification,
        )
        .await?;

        AuditService::record(
            pool,
            ctx,
            audit_actions::CREATE,
            MODEL_NAME,
            Some(&staff.id),
            changes_json(&payload),
        )
        .await?;

        Self::detail(pool, &staff.id).await
    }

    /// Get one staff member with department name
    pub async fn get(pool: &PgPool, id: &Uuid) -> AppResult<StaffDetail> {
        Self::detail(pool, id).await
    }

    /// List staff
    pub async fn list(
        pool: &PgPool,
        department_id: Option<&Uuid>,
        designation: Option<&str>,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> AppResult<Vec<StaffDetail>> {
        StaffRepository::list(pool, department_id, designation, search, ordering).await
    }

    /// Update a staff member
    pub async fn update(
        pool: &PgPool,
        ctx: &AuditContext,
        id: &Uuid,
        payload: UpdateStaffRequest,
    ) -> AppResult<StaffDetail> {
        StaffRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Staff member not found".to_string()))?;

        if let Some(phone) = payload.phone.as_deref() {
            validate_phone(phone).map_err(|msg| AppError::field("phone", msg))?;
        }

        Self::check_unique(
            pool,
            payload.staff_id.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
            Some(id),
        )
        .await?;
        Self::check_department(pool, payload.department_id.as_ref()).await?;

        let updated = StaffRepository::update(
            pool,
            id,
            payload.staff_id.as_deref(),
            payload.name.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.department_id.as_ref(),
            payload.designation.as_deref(),
            payload.qualification.as_deref(),
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

    /// Soft-delete a staff member
    pub async fn delete(pool: &PgPool, ctx: &AuditContext, id: &Uuid) -> AppResult<()> {
        if !StaffRepository::soft_delete(pool, id).await? {
            return Err(AppError::NotFound("Staff member not found".to_string()));
        }

        AuditService::record(pool, ctx, audit_actions::DELETE, MODEL_NAME, Some(id), None).await?;

        Ok(())
    }

    async fn check_unique(
        pool: &PgPool,
        staff_id: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        exclude: Option<&Uuid>,
    ) -> AppResult<()> {
        if let Some(staff_id) = staff_id {
            if StaffRepository::staff_id_exists(pool, staff_id, exclude).await? {
                return Err(AppError::field("staff_id", "Staff ID already exists"));
            }
        }

        if let Some(email) = email {
            if StaffRepository::email_exists(pool, email, exclude).await? {
                return Err(AppError::field("email", "Email already exists"));
            }
        }

        if let Some(phone) = phone {
            if StaffRepository::phone_exists(pool, phone, exclude).await? {
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

    async fn detail(pool: &PgPool, id: &Uuid) -> AppResult<StaffDetail> {
        StaffRepository::find_detail_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Staff member not found".to_string()))
    }
}
