//! Auth types shared across Kiosk services.
//!
//! Provides JWT validation, token lifetimes, and the bearer-token `Identity`
//! extractor.

pub mod identity;
pub mod token;
