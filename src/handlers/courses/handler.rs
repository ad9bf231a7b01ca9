//! Course handler implementations

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
    services::CourseService,
    state::AppState,
};

use super::{
    request::{CreateCourseRequest, ListCoursesQuery, UpdateCourseRequest},
    response::{CourseListResponse, CourseResponse},
};

/// List courses
pub async fn list_courses(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListCoursesQuery>,
) -> AppResult<Json<CourseListResponse>> {
    let courses = CourseService::list(
        state.db(),
        query.department.as_ref(),
        query.semester,
        query.assigned_faculty.as_ref(),
        query.search.as_deref(),
        query.ordering.as_deref(),
    )
    .await?;

    Ok(Envelope::ok("Courses retrieved successfully", courses))
}

/// Create a course
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Json(payload): Json<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<CourseResponse>)> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let course = CourseService::create(state.db(), &ctx, payload).await?;

    Ok(Envelope::created("Course created successfully", course))
}

/// Get one course
pub async fn get_course(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CourseResponse>> {
    let course = CourseService::get(state.db(), &id).await?;
    Ok(Envelope::ok("Course retrieved successfully", course))
}

/// Update a course
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCourseRequest>,
) -> AppResult<Json<CourseResponse>> {
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let course = CourseService::update(state.db(), &ctx, &id, payload).await?;

    Ok(Envelope::ok("Course updated successfully", course))
}

/// Soft-delete a course
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<()>>> {
    let ctx = audit_ctx(&auth_user, client_ip);
    CourseService::delete(state.db(), &ctx, &id).await?;

    Ok(Envelope::ok("Course deleted successfully", ()))
}
