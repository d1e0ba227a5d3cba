//! Domain types shared across all Kiosk services.
//!
//! This crate contains only pure types and functions with no framework or
//! database dependencies.

pub mod birthdate;
pub mod email;
pub mod pagination;
