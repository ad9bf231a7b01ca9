//! Marks entry handler implementations

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
    services::MarksService,
    state::AppState,
};

use super::{
    request::{CreateMarksRequest, ListMarksQuery, UpdateMarksRequest},
    response::{MarksListResponse, MarksResponse},
};

/// List marks entries
pub async fn list_marks(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListMarksQuery>,
) -> AppResult<Json<MarksListResponse>> {
    let marks = MarksService::list(
        state.db(),
        query.student.as_ref(),
        query.subject.as_ref(),
        query.exam.as_ref(),
        query.grade.as_deref(),
        query.search.as_deref(),
        query.ordering.as_deref(),
    )
    .await?;

    Ok(Envelope::ok("Marks retrieved successfully", marks))
}

/// Create a marks entry with derived total and grade
pub async fn create_marks(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Json(payload): Json<CreateMarksRequest>,
) -> AppResult<(StatusCode, Json<MarksResponse>)> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let entry = MarksService::create(state.db(), &ctx, payload).await?;

    Ok(Envelope::created("Marks entered successfully", entry))
}

/// Get one marks entry
pub async fn get_marks(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MarksResponse>> {
    let entry = MarksService::get(state.db(), &id).await?;
    Ok(Envelope::ok("Marks retrieved successfully", entry))
}

/// Update a marks entry, recomputing total and grade
pub async fn update_marks(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMarksRequest>,
) -> AppResult<Json<MarksResponse>> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let entry = MarksService::update(state.db(), &ctx, &id, payload).await?;

    Ok(Envelope::ok("Marks updated successfully", entry))
}

/// Soft-delete a marks entry
pub async fn delete_marks(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<()>>> {
    let ctx = audit_ctx(&auth_user, client_ip);
    MarksService::delete(state.db(), &ctx, &id).await?;

    Ok(Envelope::ok("Marks deleted successfully", ()))
}
