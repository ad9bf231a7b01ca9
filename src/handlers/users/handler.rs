//! User management handler implementations
//!
//! Every endpoint here requires the Admin role.

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
    services::UserService,
    state::AppState,
};

use super::{
    request::{CreateUserRequest, ListUsersQuery, UpdateUserRequest},
    response::{UserListResponse, UserResponse},
};

/// List user accounts
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<UserListResponse>> {
    auth_user.require_admin()?;

    let users = UserService::list(state.db(), query.role.as_deref(), query.search.as_deref())
        .await?;

    Ok(Envelope::ok("Users retrieved successfully", users))
}

/// Create a user account
pub async fn create_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    auth_user.require_admin()?;
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let user = UserService::create(state.db(), &ctx, payload).await?;

    Ok(Envelope::created("User created successfully", user))
}

/// Get one user account
pub async fn get_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    auth_user.require_admin()?;

    let user = UserService::get(state.db(), &id).await?;
    Ok(Envelope::ok("User retrieved successfully", user))
}

/// Update a user account
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    auth_user.require_admin()?;
    payload.validate()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    let user = UserService::update(state.db(), &ctx, &id, payload).await?;

    Ok(Envelope::ok("User updated successfully", user))
}

/// Deactivate a user account
///
/// Users carry no soft-delete flag; delete means `is_active = false`.
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Envelope<()>>> {
    auth_user.require_admin()?;

    let ctx = audit_ctx(&auth_user, client_ip);
    UserService::deactivate(state.db(), &ctx, &id).await?;

    Ok(Envelope::ok("User deactivated successfully", ()))
}
