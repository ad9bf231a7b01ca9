//! User management response DTOs

use crate::{handlers::envelope::Envelope, models::User};

/// Single user response
pub type UserResponse = Envelope<User>;

/// User list response
pub type UserListResponse = Envelope<Vec<User>>;
