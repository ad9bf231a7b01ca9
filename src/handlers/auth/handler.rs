//! Authentication handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    handlers::envelope::Envelope,
    middleware::{AuthenticatedUser, ClientIp},
    services::AuthService,
    state::AppState,
};

use super::{
    request::{LoginRequest, RefreshTokenRequest, RegisterRequest, UpdateProfileRequest},
    response::{AuthData, AuthResponse, ProfileResponse, RefreshResponse},
};

/// Register a new user and issue a token pair
pub async fn register(
    State(state): State<AppState>,
    client_ip: ClientIp,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    let (user, tokens) = AuthService::register(
        state.db(),
        state.config(),
        &payload.username,
        &payload.email,
        &payload.password,
        payload.role.as_deref(),
        client_ip.0,
    )
    .await?;

    Ok(Envelope::created(
        "User registered successfully",
        AuthData { user, tokens },
    ))
}

/// Login with email and password (Admin accounts only)
pub async fn login(
    State(state): State<AppState>,
    client_ip: ClientIp,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, tokens) = AuthService::login(
        state.db(),
        state.config(),
        &payload.email,
        &payload.password,
        client_ip.0,
    )
    .await?;

    Ok(Envelope::ok("Login successful", AuthData { user, tokens }))
}

/// Exchange a refresh token for a fresh pair
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenRequest>,
) -> AppResult<Json<RefreshResponse>> {
    payload.validate()?;

    let tokens = AuthService::refresh(state.db(), state.config(), &payload.refresh).await?;

    Ok(Envelope::ok("Token refreshed successfully", tokens))
}

/// Current user's profile
pub async fn profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ProfileResponse>> {
    let user = AuthService::get_user_by_id(state.db(), &auth_user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Envelope::ok("Profile retrieved successfully", user))
}

/// Partially update the caller's own username/email
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    client_ip: ClientIp,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<ProfileResponse>> {
    payload.validate()?;

    let user = AuthService::update_profile(
        state.db(),
        &auth_user.id,
        payload.username.as_deref(),
        payload.email.as_deref(),
        client_ip.0,
    )
    .await?;

    Ok(Envelope::ok("Profile updated successfully", user))
}
