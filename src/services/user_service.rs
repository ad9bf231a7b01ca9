//! User management service (Admin surface)

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::audit_actions,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    handlers::users::request::{CreateUserRequest, UpdateUserRequest},
    models::User,
    services::{
        audit_service::{AuditContext, AuditService},
        auth_service::AuthService,
    },
    utils::validation::validate_role,
};

const MODEL_NAME: &str = "User";

/// User management service
pub struct UserService;

impl UserService {
    /// Create a user account
    pub async fn create(
        pool: &PgPool,
        ctx: &AuditContext,
        payload: CreateUserRequest,
    ) -> AppResult<User> {
        validate_role(&payload.role).map_err(|msg| AppError::field("role", msg))?;

        if UserRepository::username_exists(pool, &payload.username, None).await? {
            return Err(AppError::field("username", "Username already exists"));
        }

        if UserRepository::email_exists(pool, &payload.email, None).await? {
            return Err(AppError::field("email", "Email already exists"));
        }

        let password_hash = AuthService::hash_password(&payload.password)?;
        let user = UserRepository::create(
            pool,
            &payload.username,
            &payload.email,
            &password_hash,
            &payload.role,
        )
        .await?;

        // Password never enters the audit trail
        AuditService::record(
            pool,
            ctx,
            audit_actions::CREATE,
            MODEL_NAME,
            Some(&user.id),
            Some(format!(
                r#"{{"username":"{}","email":"{}","role":"{}"}}"#,
                user.username, user.email, user.role
            )),
        )
        .await?;

        Ok(user)
    }

    /// Get one user
    pub async fn get(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// List users
    pub async fn list(
        pool: &PgPool,
        role: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<Vec<User>> {
        UserRepository::list(pool, role, search).await
    }

    /// Update a user
    pub async fn update(
        pool: &PgPool,
        ctx: &AuditContext,
        id: &Uuid,
        payload: UpdateUserRequest,
    ) -> AppResult<User> {
        Self::get(pool, id).await?;

        if let Some(role) = payload.role.as_deref() {
            validate_role(role).map_err(|msg| AppError::field("role", msg))?;
        }

        if let Some(username) = payload.username.as_deref() {
            if UserRepository::username_exists(pool, username, Some(id)).await? {
                return Err(AppError::field("username", "Username already exists"));
            }
        }

        if let Some(email) = payload.email.as_deref() {
            if UserRepository::email_exists(pool, email, Some(id)).await? {
                return Err(AppError::field("email", "Email already exists"));
            }
        }

        let updated = UserRepository::update(
            pool,
            id,
            payload.username.as_deref(),
            payload.email.as_deref(),
            payload.role.as_deref(),
            payload.is_active,
        )
        .await?;

        AuditService::record(
            pool,
            ctx,
            audit_actions::UPDATE,
            MODEL_NAME,
            Some(&updated.id),
            serde_json::to_string(&payload).ok(),
        )
        .await?;

        Ok(updated)
    }

    /// Deactivate a user account
    ///
    /// Users carry no soft-delete flag; deletion means `is_active = false`.
    pub async fn deactivate(pool: &PgPool, ctx: &AuditContext, id: &Uuid) -> AppResult<()> {
        Self::get(pool, id).await?;

        UserRepository::deactivate(pool, id).await?;

        AuditService::record(pool, ctx, audit_actions::DELETE, MODEL_NAME, Some(id), None).await?;

        Ok(())
    }
}
