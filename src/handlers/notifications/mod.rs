//! Notification handlers

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

/// Notification routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_notifications))
        .route("/", post(handler::create_notification))
        .route("/{id}", get(handler::get_notification))
        .route("/{id}", put(handler::update_notification))
        .route("/{id}", delete(handler::delete_notification))
}
