//! Result handler implementations

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
    services::ResultService,
    state::AppState,
};

use super::{
    request::{CreateResultRequest, ListResultsQuery, UpdateResultRequest},
    response::{ResultListResponse, ResultResponse},
};

/// List results
pub async fn list_results(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListResultsQuery>,
) -> AppResult<Json<ResultListResponse>> {
    let results = ResultService::list(
        state.db(),
        query.student.as_ref(),
        query.exam.as_ref(),
        query.result_status.as_deref(),
        query.search.as_deref(),
        query.ordering.as_deref(),
    )
    .await?;

    Ok(Envelope::ok("Results retrieved successfully", results))
}

/// Create a result
pub async fn create_result(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Json(payload): Json<CreateResultRequest>,
) -> AppResult<(StatusCode, Json<ResultResponse>)> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let result = ResultService::create(state.db(), &ctx, payload).await?;

    Ok(Envelope::created("Result published successfully", result))
}

/// Get one result
pub async fn get_result(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ResultResponse>> {
    let result = ResultService::get(state.db(), &id).await?;
    Ok(Envelope::ok("Result retrieved successfully", result))
}

/// All results published for one student
pub async fn student_results(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(student_id): Path<Uuid>,
) -> AppResult<Json<ResultListResponse>> {
    let results = ResultService::list_for_student(state.db(), &student_id).await?;
    Ok(Envelope::ok("Results retrieved successfully", results))
}

/// Update a result
pub async fn update_result(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateResultRequest>,
) -> AppResult<Json<ResultResponse>> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let result = ResultService::update(state.db(), &ctx, &id, payload).await?;

    Ok(Envelope::ok("Result updated successfully", result))
}

/// Soft-delete a result
pub async fn delete_result(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<()>>> {
    let ctx = audit_ctx(&auth_user, client_ip);
    ResultService::delete(state.db(), &ctx, &id).await?;

    Ok(Envelope::ok("Result deleted successfully", ()))
}
