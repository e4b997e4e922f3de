pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_services_table;
mod m20250301_000002_create_projects_table;
mod m20250301_000003_create_testimonials_table;
mod m20250301_000004_create_resources_table;
mod m20250301_000005_create_pricing_table;
mod m20250302_000001_add_created_at_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_services_table::Migration),
            Box::new(m20250301_000002_create_projects_table::Migration),
            Box::new(m20250301_000003_create_testimonials_table::Migration),
            Box::new(m20250301_000004_create_resources_table::Migration),
            Box::new(m20250301_000005_create_pricing_table::Migration),
            Box::new(m20250302_000001_add_created_at_indexes::Migration),
        ]
    }
}
