//! Notification repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{constants::target_roles, error::AppResult, models::Notification};

/// Repository for notification database operations
pub struct NotificationRepository;

impl NotificationRepository {
    /// Create a new notification
    pub async fn create(
        pool: &PgPool,
        title: &str,
        message: &str,
        target_role: &str,
    ) -> AppResult<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (title, message, target_role)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(message)
        .bind(target_role)
        .fetch_one(pool)
        .await?;

        Ok(notification)
    }

    /// Find a live notification by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Notification>> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"SELECT * FROM notifications WHERE id = $1 AND NOT is_deleted"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(notification)
    }

    /// List live notifications visible to `reader_role`
    ///
    /// Admins see everything; other roles see 'All' plus their own role.
    pub async fn list_visible(
        pool: &PgPool,
        reader_role: &str,
        target_role: Option<&str>,
        is_read: Option<bool>,
        search: Option<&str>,
    ) -> AppResult<Vec<Notification>> {
        let visible_to = if reader_role == target_roles::ADMIN {
            None
        } else {
            Some(reader_role)
        };

        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM notifications
            WHERE NOT is_deleted
              AND ($1::text IS NULL OR target_role = 'All' OR target_role = $1)
              AND ($2::text IS NULL OR target_role = $2)
              AND ($3::bool IS NULL OR is_read = $3)
              AND ($4::text IS NULL OR title ILIKE $4 OR message ILIKE $4)
            ORDER BY created_at DESC
            "#,
        )
        .bind(visible_to)
        .bind(target_role)
        .bind(is_read)
        .bind(search.map(|s| format!("%{}%", s)))
        .fetch_all(pool)
        .await?;

        Ok(notifications)
    }

    /// Update a notification; absent values keep their current value
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        message: Option<&str>,
        target_role: Option<&str>,
        is_read: Option<bool>,
    ) -> AppResult<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            UPDATE notifications
            SET title = COALESCE($2, title),
                message = COALESCE($3, message),
                target_role = COALESCE($4, target_role),
                is_read = COALESCE($5, is_read),
                updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(message)
        .bind(target_role)
        .bind(is_read)
        .fetch_one(pool)
        .await?;

        Ok(notification)
    }

    /// Soft-delete a notification; returns false if it was already gone
    pub async fn soft_delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE notifications SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
