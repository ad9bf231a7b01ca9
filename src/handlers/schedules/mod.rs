//! Exam schedule handlers

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

/// Exam schedule routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_schedules))
        .route("/", post(handler::create_schedule))
        .route("/{id}", get(handler::get_schedule))
        .route("/{id}", put(handler::update_schedule))
        .route("/{id}", delete(handler::delete_schedule))
}
