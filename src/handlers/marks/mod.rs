//! Marks entry handlers

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

/// Marks routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_marks))
        .route("/", post(handler::create_marks))
        .route("/{id}", get(handler::get_marks))
        .route("/{id}", put(handler::update_marks))
        .route("/{id}", delete(handler::delete_marks))
}
