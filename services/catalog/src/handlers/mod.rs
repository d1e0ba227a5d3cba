pub mod brand;
pub mod category;
pub mod product;

use kiosk_auth_types::identity::Identity;

use crate::error::CatalogServiceError;

/// Catalog writes are restricted to staff accounts; reads stay public.
pub fn require_staff(identity: &Identity) -> Result<(), CatalogServiceError> {
    if identity.is_staff {
        Ok(())
    } else {
        Err(CatalogServiceError::Forbidden)
    }
}
