//! Staff handler implementations

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
    services::StaffService,
    state::AppState,
};

use super::{
    request::{CreateStaffRequest, ListStaffQuery, UpdateStaffRequest},
    response::{StaffListResponse, StaffResponse},
};

/// List staff members
pub async fn list_staff(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListStaffQuery>,
) -> AppResult<Json<StaffListResponse>> {
    let staff = StaffService::list(
        state.db(),
        query.department.as_ref(),
        query.designation.as_deref(),
        query.search.as_deref(),
        query.ordering.as_deref(),
    )
    .await?;

    Ok(Envelope::ok("Staff retrieved successfully", staff))
}

/// Create a staff member
pub async fn create_staff(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Json(payload): Json<CreateStaffRequest>,
) -> AppResult<(StatusCode, Json<StaffResponse>)> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let staff = StaffService::create(state.db(), &ctx, payload).await?;

    Ok(Envelope::created("Staff member created successfully", staff))
}

/// Get one staff member
pub async fn get_staff(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StaffResponse>> {
    let staff = StaffService::get(state.db(), &id).await?;
    Ok(Envelope::ok("Staff member retrieved successfully", staff))
}

/// Update a staff member
pub async fn update_staff(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStaffRequest>,
) -> AppResult<Json<StaffResponse>> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let staff = StaffService::update(state.db(), &ctx, &id, payload).await?;

    Ok(Envelope::ok("Staff member updated successfully", staff))
}

/// Soft-delete a staff member
pub async fn delete_staff(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<()>>> {
    let ctx = audit_ctx(&auth_user, client_ip);
    StaffService::delete(state.db(), &ctx, &id).await?;

    Ok(Envelope::ok("Staff member deleted successfully", ()))
}
