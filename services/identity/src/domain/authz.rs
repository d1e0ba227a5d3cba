//! Ownership checks for user and profile resources.
//!
//! The owner-or-read-only rule is an explicit ordered boolean composition:
//! safe methods pass first, then the owner check. Keeping the order in one
//! function avoids the permission-stacking ambiguity the checks had as
//! separate composable classes.

use axum::http::Method;
use uuid::Uuid;

use crate::domain::types::{Profile, User};
use crate::error::IdentityServiceError;

/// A resource with a single owning user.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

impl Owned for User {
    fn owner_id(&self) -> Uuid {
        self.id
    }
}

impl Owned for Profile {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

/// Safe methods never mutate state (GET/HEAD/OPTIONS).
pub fn is_safe_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Allow access only to the resource's owner.
pub fn allow_owner(subject: Uuid, resource: &impl Owned) -> Result<(), IdentityServiceError> {
    if resource.owner_id() == subject {
        Ok(())
    } else {
        Err(IdentityServiceError::Forbidden)
    }
}

/// Allow reads to any authenticated caller and writes only to the owner.
/// Evaluated in that order: safe method first, then ownership.
pub fn allow_owner_or_read_only(
    method: &Method,
    subject: Uuid,
    resource: &impl Owned,
) -> Result<(), IdentityServiceError> {
    if is_safe_method(method) {
        return Ok(());
    }
    allow_owner(subject, resource)
}
