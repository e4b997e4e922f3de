pub mod pricing;
pub mod projects;
pub mod resources;
pub mod services;
pub mod testimonials;

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Create a SeaORM connection pool for the given Postgres URL.
pub async fn create_pool(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
