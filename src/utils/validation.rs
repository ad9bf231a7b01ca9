//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;

use crate::constants;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("valid phone regex"));

/// Validate user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Validate exam type
pub fn validate_exam_type(exam_type: &str) -> Result<(), &'static str> {
    if constants::exam_types::ALL.contains(&exam_type) {
        Ok(())
    } else {
        Err("Invalid exam type")
    }
}

/// Validate student status
pub fn validate_student_status(status: &str) -> Result<(), &'static str> {
    if constants::student_statuses::ALL.contains(&status) {
        Ok(())
    } else {
        Err("Invalid status")
    }
}

/// Validate notification target role
pub fn validate_target_role(target_role: &str) -> Result<(), &'static str> {
    if constants::target_roles::ALL.contains(&target_role) {
        Ok(())
    } else {
        Err("Invalid target role")
    }
}

/// Validate a phone number (7-15 digits, optional leading +)
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err("Invalid phone number")
    }
}

/// Validate result status
pub fn validate_result_status(result_status: &str) -> Result<(), &'static str> {
    if constants::result_statuses::ALL.contains(&result_status) {
        Ok(())
    } else {
        Err("Invalid result status")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_role() {
        assert!(validate_role("Admin").is_ok());
        assert!(validate_role("Staff").is_ok());
        assert!(validate_role("Student").is_ok());
        assert!(validate_role("admin").is_err()); // Case sensitive
        assert!(validate_role("Superuser").is_err());
    }

    #[test]
    fn test_validate_exam_type() {
        assert!(validate_exam_type("Internal").is_ok());
        assert!(validate_exam_type("Model").is_ok());
        assert!(validate_exam_type("Semester").is_ok());
        assert!(validate_exam_type("Final").is_err());
    }

    #[test]
    fn test_validate_student_status() {
        assert!(validate_student_status("active").is_ok());
        assert!(validate_student_status("inactive").is_ok());
        assert!(validate_student_status("Active").is_err());
    }

    #[test]
    fn test_validate_target_role() {
        assert!(validate_target_role("All").is_ok());
        assert!(validate_target_role("Student").is_ok());
        assert!(validate_target_role("Everyone").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("+919876543210").is_ok());
        assert!(validate_phone("12345").is_err()); // too short
        assert!(validate_phone("98765 43210").is_err());
        assert!(validate_phone("not-a-number").is_err());
    }

    #[test]
    fn test_validate_result_status() {
        assert!(validate_result_status("Pass").is_ok());
        assert!(validate_result_status("Fail").is_ok());
        assert!(validate_result_status("pass").is_err());
    }
}
