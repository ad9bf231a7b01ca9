//! Student handler implementations

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
    services::StudentService,
    state::AppState,
};

use super::{
    request::{CreateStudentRequest, ListStudentsQuery, UpdateStudentRequest},
    response::{StudentListResponse, StudentResponse},
};

/// List students
pub async fn list_students(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListStudentsQuery>,
) -> AppResult<Json<StudentListResponse>> {
    let students = StudentService::list(state.db(), &query).await?;
    Ok(Envelope::ok("Students retrieved successfully", students))
}

/// Create a student
pub async fn create_student(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Json(payload): Json<CreateStudentRequest>,
) -> AppResult<(StatusCode, Json<StudentResponse>)> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let student = StudentService::create(state.db(), &ctx, payload).await?;

    Ok(Envelope::created("Student created successfully", student))
}

/// Get one student
pub async fn get_student(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StudentResponse>> {
    let student = StudentService::get(state.db(), &id).await?;
    Ok(Envelope::ok("Student retrieved successfully", student))
}

/// Update a student
pub async fn update_student(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStudentRequest>,
) -> AppResult<Json<StudentResponse>> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let student = StudentService::update(state.db(), &ctx, &id, payload).await?;

    Ok(Envelope::ok("Student updated successfully", student))
}

/// Soft-delete a student
pub async fn delete_student(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<()>>> {
    let ctx = audit_ctx(&auth_user, client_ip);
    StudentService::delete(state.db(), &ctx, &id).await?;

    Ok(Envelope::ok("Student deleted successfully", ()))
}
