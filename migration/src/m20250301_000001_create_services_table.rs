use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `services` table. Column names are lowercase to match
/// the hosted store (`longdescription`, not `long_description`).
#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Title,
    Icon,
    Description,
    #[sea_orm(iden = "longdescription")]
    LongDescription,
    Image,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Services::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Services::Title).string().not_null())
                    .col(ColumnDef::new(Services::Icon).string().null())
                    .col(ColumnDef::new(Services::Description).text().null())
                    .col(ColumnDef::new(Services::LongDescription).text().null())
                    .col(ColumnDef::new(Services::Image).string().null())
                    .col(
                        ColumnDef::new(Services::Status)
                            .string()
                            .null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Services::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Services::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}
