//! Hall ticket handler implementations

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
    services::HallTicketService,
    state::AppState,
};

use super::{
    request::{CreateHallTicketRequest, ListHallTicketsQuery, UpdateHallTicketRequest},
    response::{HallTicketListResponse, HallTicketResponse},
};

/// List hall tickets
pub async fn list_hall_tickets(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListHallTicketsQuery>,
) -> AppResult<Json<HallTicketListResponse>> {
    let tickets = HallTicketService::list(
        state.db(),
        query.student.as_ref(),
        query.exam.as_ref(),
        query.search.as_deref(),
    )
    .await?;

    Ok(Envelope::ok("Hall tickets retrieved successfully", tickets))
}

/// Create a hall ticket and render its QR code
pub async fn create_hall_ticket(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Json(payload): Json<CreateHallTicketRequest>,
) -> AppResult<(StatusCode, Json<HallTicketResponse>)> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let ticket = HallTicketService::create(
        state.db(),
        &state.config().storage,
        &ctx,
        payload,
    )
    .await?;

    Ok(Envelope::created("Hall ticket created successfully", ticket))
}

/// Get one hall ticket
pub async fn get_hall_ticket(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<HallTicketResponse>> {
    let ticket = HallTicketService::get(state.db(), &id).await?;
    Ok(Envelope::ok("Hall ticket retrieved successfully", ticket))
}

/// All hall tickets issued to one student
pub async fn student_hall_tickets(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(student_id): Path<Uuid>,
) -> AppResult<Json<HallTicketListResponse>> {
    let tickets = HallTicketService::list_for_student(state.db(), &student_id).await?;
    Ok(Envelope::ok("Hall tickets retrieved successfully", tickets))
}

/// Update a hall ticket
pub async fn update_hall_ticket(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateHallTicketRequest>,
) -> AppResult<Json<HallTicketResponse>> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let ticket = HallTicketService::update(state.db(), &ctx, &id, payload).await?;

    Ok(Envelope::ok("Hall ticket updated successfully", ticket))
}

/// Soft-delete a hall ticket
pub async fn delete_hall_ticket(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<()>>> {
    let ctx = audit_ctx(&auth_user, client_ip);
    HallTicketService::delete(state.db(), &ctx, &id).await?;

    Ok(Envelope::ok("Hall ticket deleted successfully", ()))
}
