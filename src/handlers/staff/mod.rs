//! Staff management handlers

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

/// Staff routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_staff))
        .route("/", post(handler::create_staff))
        .route("/{id}", get(handler::get_staff))
        .route("/{id}", put(handler::update_staff))
        .route("/{id}", delete(handler::delete_staff))
}
