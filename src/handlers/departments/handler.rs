//! Department handler implementations

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
    services::DepartmentService,
    state::AppState,
};

use super::{
    request::{CreateDepartmentRequest, ListDepartmentsQuery, UpdateDepartmentRequest},
    response::{DepartmentListResponse, DepartmentResponse},
};

/// List departments
pub async fn list_departments(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListDepartmentsQuery>,
) -> AppResult<Json<DepartmentListResponse>> {
    let departments = DepartmentService::list(
        state.db(),
        query.search.as_deref(),
        query.ordering.as_deref(),
    )
    .await?;

    Ok(Envelope::ok(
        "Departments retrieved successfully",
        departments,
    ))
}

/// Create a department
pub async fn create_department(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Json(payload): Json<CreateDepartmentRequest>,
) -> AppResult<(StatusCode, Json<DepartmentResponse>)> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let department = DepartmentService::create(state.db(), &ctx, payload).await?;

    Ok(Envelope::created(
        "Department created successfully",
        department,
    ))
}

/// Get one department
pub async fn get_department(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DepartmentResponse>> {
    let department = DepartmentService::get(state.db(), &id).await?;
    Ok(Envelope::ok(
        "Department retrieved successfully",
        department,
    ))
}

/// Update a department
pub async fn update_department(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDepartmentRequest>,
) -> AppResult<Json<DepartmentResponse>> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let department = DepartmentService::update(state.db(), &ctx, &id, payload).await?;

    Ok(Envelope::ok("Department updated successfully", department))
}

/// Soft-delete a department
pub async fn delete_department(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<()>>> {
    let ctx = audit_ctx(&auth_user, client_ip);
    DepartmentService::delete(state.db(), &ctx, &id).await?;

    Ok(Envelope::ok("Department deleted successfully", ()))
}
