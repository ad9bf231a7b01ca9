//! Dashboard handler

use axum::{extract::State, routing::get, Json, Router};

use crate::{
    error::AppResult,
    handlers::envelope::Envelope,
    middleware::AuthenticatedUser,
    services::{dashboard_service::DashboardSummary, DashboardService},
    state::AppState,
};

/// Aggregate counters for the landing dashboard
async fn dashboard(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
) -> AppResult<Json<Envelope<DashboardSummary>>> {
    let summary = DashboardService::summary(state.db()).await?;
    Ok(Envelope::ok("Dashboard data retrieved successfully", summary))
}

/// Dashboard routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}
