//! User management handlers (Admin surface)

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// User management routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_users))
        .route("/", post(handler::create_user))
        .route("/{id}", get(handler::get_user))
        .route("/{id}", put(handler::update_user))
        .route("/{id}", delete(handler::delete_user))
}
