//! SeaORM entities for the catalog database.

pub mod brands;
pub mod categories;
pub mod product_categories;
pub mod products;
