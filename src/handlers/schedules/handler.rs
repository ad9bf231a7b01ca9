//! Exam schedule handler implementations

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
    services::ScheduleService,
    state::AppState,
};

use super::{
    request::{CreateScheduleRequest, ListSchedulesQuery, UpdateScheduleRequest},
    response::{ScheduleListResponse, ScheduleResponse},
};

/// List schedule entries
pub async fn list_schedules(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListSchedulesQuery>,
) -> AppResult<Json<ScheduleListResponse>> {
    let schedules = ScheduleService::list(
        state.db(),
        query.exam.as_ref(),
        query.subject.as_ref(),
        query.date,
        query.search.as_deref(),
        query.ordering.as_deref(),
    )
    .await?;

    Ok(Envelope::ok(
        "Exam schedules retrieved successfully",
        schedules,
    ))
}

/// Create a schedule entry (rejected on hall clashes)
pub async fn create_schedule(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Json(payload): Json<CreateScheduleRequest>,
) -> AppResult<(StatusCode, Json<ScheduleResponse>)> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let schedule = ScheduleService::create(state.db(), &ctx, payload).await?;

    Ok(Envelope::created(
        "Exam schedule created successfully",
        schedule,
    ))
}

/// Get one schedule entry
pub async fn get_schedule(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ScheduleResponse>> {
    let schedule = ScheduleService::get(state.db(), &id).await?;
    Ok(Envelope::ok(
        "Exam schedule retrieved successfully",
        schedule,
    ))
}

/// Update a schedule entry (clash checks re-run on the merged slot)
pub async fn update_schedule(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateScheduleRequest>,
) -> AppResult<Json<ScheduleResponse>> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let schedule = ScheduleService::update(state.db(), &ctx, &id, payload).await?;

    Ok(Envelope::ok("Exam schedule updated successfully", schedule))
}

/// Soft-delete a schedule entry
pub async fn delete_schedule(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<()>>> {
    let ctx = audit_ctx(&auth_user, client_ip);
    ScheduleService::delete(state.db(), &ctx, &id).await?;

    Ok(Envelope::ok("Exam schedule deleted successfully", ()))
}
