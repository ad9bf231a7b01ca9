//! Audit log repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::AuditLog};

/// Repository for the append-only audit trail
///
/// Rows are inserted and read, never updated or deleted.
pub struct AuditRepository;

impl AuditRepository {
    /// Append one audit row
    pub async fn insert(
        pool: &PgPool,
        user_id: Option<&Uuid>,
        action: &str,
        model_name: &str,
        object_id: Option<&Uuid>,
        changes: Option<&str>,
        ip_address: Option<&str>,
    ) -> AppResult<AuditLog> {
        let log = sqlx::query_as::<_, AuditLog>(
            r#"
            INSERT INTO audit_logs (
                user_id, action, model_name, object_id, changes, ip_address
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(action)
        .bind(model_name)
        .bind(object_id)
        .bind(changes)
        .bind(ip_address)
        .fetch_one(pool)
        .await?;

        Ok(log)
    }

    /// List audit rows newest first, filterable by action and model name
    pub async fn list(
        pool: &PgPool,
        action: Option<&str>,
        model_name: Option<&str>,
        limit: i64,
    ) -> AppResult<Vec<AuditLog>> {
        let logs = sqlx::query_as::<_, AuditLog>(
            r#"
            SELECT * FROM audit_logs
            WHERE ($1::text IS NULL OR action = $1)
              AND ($2::text IS NULL OR model_name = $2)
            ORDER BY timestamp DESC
            LIMIT $3
            "#,
        )
        .bind(action)
        .bind(model_name)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(logs)
    }
}
