//! sea-orm entities for the identity service.

pub mod profiles;
pub mod users;
