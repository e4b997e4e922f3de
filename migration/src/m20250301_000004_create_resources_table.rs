use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Resources {
    Table,
    Id,
    Title,
    Description,
    Content,
    Excerpt,
    Image,
    Category,
    Type,
    #[sea_orm(iden = "downloadurl")]
    DownloadUrl,
    Author,
    Date,
    #[sea_orm(iden = "readtime")]
    ReadTime,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resources::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Resources::Title).string().not_null())
                    .col(ColumnDef::new(Resources::Description).text().null())
                    .col(ColumnDef::new(Resources::Content).text().null())
                    .col(ColumnDef::new(Resources::Excerpt).text().null())
                    .col(ColumnDef::new(Resources::Image).string().null())
                    .col(ColumnDef::new(Resources::Category).string().null())
                    .col(ColumnDef::new(Resources::Type).string().null())
                    .col(ColumnDef::new(Resources::DownloadUrl).string().null())
                    .col(ColumnDef::new(Resources::Author).string().null())
                    .col(ColumnDef::new(Resources::Date).string().null())
                    .col(ColumnDef::new(Resources::ReadTime).string().null())
                    .col(
                        ColumnDef::new(Resources::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Resources::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Resources::Table).to_owned())
            .await
    }
}
