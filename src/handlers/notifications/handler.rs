//! Notification handler implementations
//!
//! Reads are filtered by the caller's role: non-admins only see
//! notifications targeted at 'All' or their own role.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::{audit_ctx, envelope::Envelope},
    middleware::{AuthenticatedUser, ClientIp},
    services::NotificationService,
    state::AppState,
};

use super::{
    request::{CreateNotificationRequest, ListNotificationsQuery, UpdateNotificationRequest},
    response::{NotificationListResponse, NotificationResponse},
};

/// List notifications visible to the caller
pub async fn list_notifications(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListNotificationsQuery>,
) -> AppResult<Json<NotificationListResponse>> {
    let notifications = NotificationService::list(
        state.db(),
        &auth_user.role,
        query.target_role.as_deref(),
        query.is_read,
        query.search.as_deref(),
    )
    .await?;

    Ok(Envelope::ok(
        "Notifications retrieved successfully",
        notifications,
    ))
}

/// Create a notification
pub async fn create_notification(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Json(payload): Json<CreateNotificationRequest>,
) -> AppResult<(StatusCode, Json<NotificationResponse>)> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let notification = NotificationService::create(state.db(), &ctx, payload).await?;

    Ok(Envelope::created(
        "Notification created successfully",
        notification,
    ))
}

/// Get one notification (404 when invisible to the caller)
pub async fn get_notification(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<NotificationResponse>> {
    let notification = NotificationService::get(state.db(), &id, &auth_user.role).await?;
    Ok(Envelope::ok(
        "Notification retrieved successfully",
        notification,
    ))
}

/// Update a notification
pub async fn update_notification(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateNotificationRequest>,
) -> AppResult<Json<NotificationResponse>> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let notification = NotificationService::update(state.db(), &ctx, &id, payload).await?;

    Ok(Envelope::ok(
        "Notification updated successfully",
        notification,
    ))
}

/// Soft-delete a notification
pub async fn delete_notification(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<()>>> {
    let ctx = audit_ctx(&auth_user, client_ip);
    NotificationService::delete(state.db(), &ctx, &id).await?;

    Ok(Envelope::ok("Notification deleted successfully", ()))
}
