pub mod authz;
pub mod repository;
pub mod types;
