//! Notification service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{audit_actions, target_roles},
    db::repositories::NotificationRepository,
    error::{AppError, AppResult},
    handlers::notifications::request::{CreateNotificationRequest, UpdateNotificationRequest},
    models::Notification,
    services::audit_service::{changes_json, AuditContext, AuditService},
    utils::validation::validate_target_role,
};

const MODEL_NAME: &str = "Notification";

/// Notification service
pub struct NotificationService;

impl NotificationService {
    /// Create a notification
    pub async fn create(
        pool: &PgPool,
        ctx: &AuditContext,
        payload: CreateNotificationRequest,
    ) -> AppResult<Notification> {
        let target_role = payload
            .target_role
            .as_deref()
            .unwrap_or(target_roles::ALL_ROLES);
        validate_target_role(target_role).map_err(|msg| AppError::field("target_role", msg))?;

        let notification =
            NotificationRepository::create(pool, &payload.title, &payload.message, target_role)
                .await?;

        AuditService::record(
            pool,
            ctx,
            audit_actions::CREATE,
            MODEL_NAME,
            Some(&notification.id),
            changes_json(&payload),
        )
        .await?;

        Ok(notification)
    }

    /// Get one notification, honoring reader visibility
    pub async fn get(pool: &PgPool, id: &Uuid, reader_role: &str) -> AppResult<Notification> {
        let notification = NotificationRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

        if !Self::visible_to(&notification, reader_role) {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        Ok(notification)
    }

    /// List notifications visible to the reader's role
    pub async fn list(
        pool: &PgPool,
        reader_role: &str,
        target_role: Option<&str>,
        is_read: Option<bool>,
        search: Option<&str>,
    ) -> AppResult<Vec<Notification>> {
        NotificationRepository::list_visible(pool, reader_role, target_role, is_read, search).await
    }

    /// Update a notification
    pub async fn update(
        pool: &PgPool,
        ctx: &AuditContext,
        id: &Uuid,
        payload: UpdateNotificationRequest,
    ) -> AppResult<Notification> {
        NotificationRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

        if let Some(target_role) = payload.target_role.as_deref() {
            validate_target_role(target_role)
                .map_err(|msg| AppError::field("target_role", msg))?;
        }

        let updated = NotificationRepository::update(
            pool,
            id,
            payload.title.as_deref(),
            payload.message.as_deref(),
            payload.target_role.as_deref(),
            payload.is_read,
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

        Ok(updated)
    }

    /// Soft-delete a notification
    pub async fn delete(pool: &PgPool, ctx: &AuditContext, id: &Uuid) -> AppResult<()> {
        if !NotificationRepository::soft_delete(pool, id).await? {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        AuditService::record(pool, ctx, audit_actions::DELETE, MODEL_NAME, Some(id), None).await?;

        Ok(())
    }

    fn visible_to(notification: &Notification, reader_role: &str) -> bool {
        reader_role == target_roles::ADMIN
            || notification.target_role == target_roles::ALL_ROLES
            || notification.target_role == reader_role
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn notification(target_role: &str) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            title: "Semester exams".to_string(),
            message: "Timetable published".to_string(),
            target_role: target_role.to_string(),
            is_read: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_deleted: false,
        }
    }

    #[test]
    fn test_admin_sees_everything() {
        assert!(NotificationService::visible_to(&notification("Staff"), "Admin"));
        assert!(NotificationService::visible_to(&notification("Student"), "Admin"));
    }

    #[test]
    fn test_role_sees_all_and_own_role_only() {
        assert!(NotificationService::visible_to(&notification("All"), "Student"));
        assert!(NotificationService::visible_to(&notification("Student"), "Student"));
        assert!(!NotificationService::visible_to(&notification("Staff"), "Student"));
    }
}
