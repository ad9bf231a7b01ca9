//! Exam handler implementations

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
    services::ExamService,
    state::AppState,
};

use super::{
    request::{CreateExamRequest, ListExamsQuery, UpdateExamRequest},
    response::{ExamListResponse, ExamResponse},
};

/// List exams
pub async fn list_exams(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListExamsQuery>,
) -> AppResult<Json<ExamListResponse>> {
    let exams = ExamService::list(
        state.db(),
        query.exam_type.as_deref(),
        query.semester,
        query.department.as_ref(),
        query.search.as_deref(),
        query.ordering.as_deref(),
    )
    .await?;

    Ok(Envelope::ok("Exams retrieved successfully", exams))
}

/// Create an exam
pub async fn create_exam(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Json(payload): Json<CreateExamRequest>,
) -> AppResult<(StatusCode, Json<ExamResponse>)> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let exam = ExamService::create(state.db(), &ctx, payload).await?;

    Ok(Envelope::created("Exam created successfully", exam))
}

/// Get one exam
pub async fn get_exam(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ExamResponse>> {
    let exam = ExamService::get(state.db(), &id).await?;
    Ok(Envelope::ok("Exam retrieved successfully", exam))
}

/// Update an exam
pub async fn update_exam(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateExamRequest>,
) -> AppResult<Json<ExamResponse>> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let exam = ExamService::update(state.db(), &ctx, &id, payload).await?;

    Ok(Envelope::ok("Exam updated successfully", exam))
}

/// Soft-delete an exam
pub async fn delete_exam(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<()>>> {
    let ctx = audit_ctx(&auth_user, client_ip);
    ExamService::delete(state.db(), &ctx, &id).await?;

    Ok(Envelope::ok("Exam deleted successfully", ()))
}
