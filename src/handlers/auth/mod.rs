//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Authentication routes
///
/// Register, login and token refresh are public; the profile endpoints sit
/// behind the auth middleware.
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/profile", get(handler::profile))
        .route("/profile/update", put(handler::update_profile))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .route("/token/refresh", post(handler::refresh))
        .merge(protected)
}
