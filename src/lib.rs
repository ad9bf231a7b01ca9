//! ExamDesk - College Examination Management Backend
//!
//! This library provides the core functionality for ExamDesk, a REST backend
//! managing departments, staff, students, courses, exams, exam schedules,
//! hall tickets, marks, results and notifications.
//!
//! # Features
//!
//! - Role-based access control (Admin, Staff, Student) over a JWT token pair
//! - Hall/time-slot clash detection for exam scheduling
//! - Automatic total/grade computation on marks entry
//! - Soft delete with reusable natural keys across every entity
//! - Append-only audit trail of every mutating action
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
