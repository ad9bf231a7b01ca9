//! Result handlers

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

/// Result routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_results))
        .route("/", post(handler::create_result))
        .route("/{id}", get(handler::get_result))
        .route("/{id}", put(handler::update_result))
        .route("/{id}", delete(handler::delete_result))
        // All results published for one student
        .route("/student/{student_id}", get(handler::student_results))
}
