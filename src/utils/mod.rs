//! Utility functions

pub mod qr;
pub mod validation;

pub use qr::write_ticket_qr;
