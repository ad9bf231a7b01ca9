//! Authentication response DTOs

use serde::Serialize;

use crate::{handlers::envelope::Envelope, models::User, services::auth_service::TokenPair};

/// Authenticated user plus its token pair
#[derive(Debug, Serialize)]
pub struct AuthData {
    pub user: User,
    pub tokens: TokenPair,
}

/// Register/login response
pub type AuthResponse = Envelope<AuthData>;

/// Token refresh response
pub type RefreshResponse = Envelope<TokenPair>;

/// Profile response
pub type ProfileResponse = Envelope<User>;
