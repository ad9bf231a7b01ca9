//! Audit trail service
//!
//! Every mutating operation ends with an explicit call into this service;
//! there is no implicit middleware hook. A failed audit write propagates to
//! the caller and fails the request.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::AuditRepository,
    error::AppResult,
    models::AuditLog,
};

/// Who performed the action and from where
///
/// Built once per request from the authenticated user and the client IP,
/// then threaded through the service mutation.
#[derive(Debug, Clone)]
pub struct AuditContext {
    pub user_id: Uuid,
    pub ip_address: Option<String>,
}

/// Audit service
pub struct AuditService;

impl AuditService {
    /// Append one audit row for a mutating action
    ///
    /// `changes` carries the JSON-serialized request payload for creates and
    /// updates, and nothing for deletes.
    pub async fn record(
        pool: &PgPool,
        ctx: &AuditContext,
        action: &str,
        model_name: &str,
        object_id: Option<&Uuid>,
        changes: Option<String>,
    ) -> AppResult<()> {
        AuditRepository::insert(
            pool,
            Some(&ctx.user_id),
            action,
            model_name,
            object_id,
            changes.as_deref(),
            ctx.ip_address.as_deref(),
        )
        .await?;

        Ok(())
    }

    /// Read the trail newest first (Admin surface)
    pub async fn list(
        pool: &PgPool,
        action: Option<&str>,
        model_name: Option<&str>,
        limit: i64,
    ) -> AppResult<Vec<AuditLog>> {
        AuditRepository::list(pool, action, model_name, limit).await
    }
}

/// Serialize a request payload for the audit trail's `changes` column
pub fn changes_json<T: serde::Serialize>(payload: &T) -> Option<String> {
    serde_json::to_string(payload).ok()
}
