//! Student management handlers

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

/// Student routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_students))
        .route("/", post(handler::create_student))
        .route("/{id}", get(handler::get_student))
        .route("/{id}", put(handler::update_student))
        .route("/{id}", delete(handler::delete_student))
}
