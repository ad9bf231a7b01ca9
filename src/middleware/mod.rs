//! HTTP middleware

pub mod auth;
pub mod client_ip;
pub mod logging;

pub use auth::{auth_middleware, AuthenticatedUser};
pub use client_ip::ClientIp;
pub use logging::logging_middleware;
