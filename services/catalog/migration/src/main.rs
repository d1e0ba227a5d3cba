use sea_orm_migration::prelude::*;

mod m20260801_000001_create_brands;
mod m20260801_000002_create_categories;
mod m20260801_000003_create_products;
mod m20260801_000004_create_product_categories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_brands::Migration),
            Box::new(m20260801_000002_create_categories::Migration),
            Box::new(m20260801_000003_create_products::Migration),
            Box::new(m20260801_000004_create_product_categories::Migration),
        ]
    }
}

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
