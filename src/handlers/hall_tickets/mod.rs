//! Hall ticket handlers

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

/// Hall ticket routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_hall_tickets))
        .route("/", post(handler::create_hall_ticket))
        .route("/{id}", get(handler::get_hall_ticket))
        .route("/{id}", put(handler::update_hall_ticket))
        .route("/{id}", delete(handler::delete_hall_ticket))
        // All tickets issued to one student
        .route("/student/{student_id}", get(handler::student_hall_tickets))
}
