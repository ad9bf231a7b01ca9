//! HTTP request handlers
//!
//! One module per resource, each with its routes, request DTOs and response
//! shapes. Every entity resource sits behind the auth middleware; the Admin
//! gate for the user-management and audit-trail surfaces lives in their
//! handlers.

pub mod audit_logs;
pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod departments;
pub mod envelope;
pub mod exams;
pub mod hall_tickets;
pub mod health;
pub mod marks;
pub mod notifications;
pub mod results;
pub mod schedules;
pub mod staff;
pub mod students;
pub mod users;

use axum::{middleware, Router};

use crate::{
    middleware::{auth::auth_middleware, AuthenticatedUser, ClientIp},
    services::AuditContext,
    state::AppState,
};

/// Audit context for the current request
pub(crate) fn audit_ctx(auth_user: &AuthenticatedUser, client_ip: ClientIp) -> AuditContext {
    AuditContext {
        user_id: auth_user.id,
        ip_address: client_ip.0,
    }
}

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/users", users::routes())
        .nest("/departments", departments::routes())
        .nest("/staff", staff::routes())
        .nest("/students", students::routes())
        .nest("/courses", courses::routes())
        .nest("/exams", exams::routes())
        .nest("/exam-schedules", schedules::routes())
        .nest("/hall-tickets", hall_tickets::routes())
        .nest("/marks", marks::routes())
        .nest("/results", results::routes())
        .nest("/notifications", notifications::routes())
        .nest("/audit-logs", audit_logs::routes())
        .merge(dashboard::routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes(state))
        .merge(protected)
}
