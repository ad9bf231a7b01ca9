//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default access token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default refresh token expiry in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum username length accepted at registration
pub const MAX_USERNAME_LENGTH: u64 = 150;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "Admin";
    pub const STAFF: &str = "Staff";
    pub const STUDENT: &str = "Student";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, STAFF, STUDENT];
}

// =============================================================================
// DOMAIN ENUMERATIONS
// =============================================================================

/// Exam type identifiers
pub mod exam_types {
    pub const INTERNAL: &str = "Internal";
    pub const MODEL: &str = "Model";
    pub const SEMESTER: &str = "Semester";

    /// All exam types
    pub const ALL: &[&str] = &[INTERNAL, MODEL, SEMESTER];
}

/// Student enrolment statuses
pub mod student_statuses {
    pub const ACTIVE: &str = "active";
    pub const INACTIVE: &str = "inactive";

    /// All student statuses
    pub const ALL: &[&str] = &[ACTIVE, INACTIVE];
}

/// Letter grades, in descending order of the bands that produce them
pub mod grades {
    pub const OUTSTANDING: &str = "O";
    pub const EXCELLENT: &str = "A+";
    pub const VERY_GOOD: &str = "A";
    pub const GOOD: &str = "B+";
    pub const ABOVE_AVERAGE: &str = "B";
    pub const AVERAGE: &str = "C";
    pub const FAIL: &str = "F";

    /// All letter grades
    pub const ALL: &[&str] = &[
        OUTSTANDING,
        EXCELLENT,
        VERY_GOOD,
        GOOD,
        ABOVE_AVERAGE,
        AVERAGE,
        FAIL,
    ];
}

/// Result statuses
pub mod result_statuses {
    pub const PASS: &str = "Pass";
    pub const FAIL: &str = "Fail";

    /// All result statuses
    pub const ALL: &[&str] = &[PASS, FAIL];
}

/// Notification target audiences
pub mod target_roles {
    pub const ALL_ROLES: &str = "All";
    pub const ADMIN: &str = "Admin";
    pub const STAFF: &str = "Staff";
    pub const STUDENT: &str = "Student";

    /// All notification targets
    pub const ALL: &[&str] = &[ALL_ROLES, ADMIN, STAFF, STUDENT];
}

// =============================================================================
// AUDIT LOG ACTIONS
// =============================================================================

/// Action kinds recorded in the audit trail
pub mod audit_actions {
    pub const CREATE: &str = "CREATE";
    pub const UPDATE: &str = "UPDATE";
    pub const DELETE: &str = "DELETE";
    pub const LOGIN: &str = "LOGIN";
    pub const REGISTER: &str = "REGISTER";
    pub const UPDATE_PROFILE: &str = "UPDATE_PROFILE";
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Window used for the "upcoming exams" dashboard counter, in days
pub const UPCOMING_EXAM_WINDOW_DAYS: i64 = 30;

// =============================================================================
// VALIDATION LIMITS
// =============================================================================

/// Maximum length for names and titles (people, departments, courses, exams)
pub const MAX_NAME_LENGTH: u64 = 200;

/// Maximum length for identifier codes (student ids, register numbers, halls)
pub const MAX_CODE_LENGTH: u64 = 50;

/// Maximum length for department and course codes
pub const MAX_SHORT_CODE_LENGTH: u64 = 20;

/// Maximum phone number length
pub const MAX_PHONE_LENGTH: u64 = 15;

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
