use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Every content table is listed newest first.
const TABLES: [&str; 5] = ["services", "projects", "testimonials", "resources", "pricing"];

#[derive(DeriveIden)]
enum Common {
    CreatedAt,
}

fn index_name(table: &str) -> String {
    format!("idx_{table}_created_at")
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in TABLES {
            manager
                .create_index(
                    Index::create()
                        .name(index_name(table))
                        .table(Alias::new(table))
                        .col(Common::CreatedAt)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in TABLES {
            manager
                .drop_index(Index::drop().name(index_name(table)).to_owned())
                .await?;
        }

        Ok(())
    }
}
