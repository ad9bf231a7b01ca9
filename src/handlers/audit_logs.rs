//! Audit trail read surface (Admin only)

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    handlers::envelope::Envelope,
    middleware::AuthenticatedUser,
    models::AuditLog,
    services::AuditService,
    state::AppState,
};

/// List audit logs query parameters
#[derive(Debug, Deserialize)]
pub struct ListAuditLogsQuery {
    pub action: Option<String>,
    pub model_name: Option<String>,
    pub limit: Option<i64>,
}

/// Newest-first slice of the audit trail
async fn list_audit_logs(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListAuditLogsQuery>,
) -> AppResult<Json<Envelope<Vec<AuditLog>>>> {
    auth_user.require_admin()?;

    let limit = query.limit.unwrap_or(100).clamp(1, 500);
    let logs = AuditService::list(
        state.db(),
        query.action.as_deref(),
        query.model_name.as_deref(),
        limit,
    )
    .await?;

    Ok(Envelope::ok("Audit logs retrieved successfully", logs))
}

/// Audit log routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_audit_logs))
}
