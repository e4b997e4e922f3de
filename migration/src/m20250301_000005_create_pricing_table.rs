use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Pricing {
    Table,
    Id,
    Name,
    Price,
    Description,
    Features,
    Popular,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pricing::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Pricing::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Pricing::Name).string().not_null())
                    .col(ColumnDef::new(Pricing::Price).double().null())
                    .col(ColumnDef::new(Pricing::Description).text().null())
                    .col(ColumnDef::new(Pricing::Features).json_binary().null())
                    .col(
                        ColumnDef::new(Pricing::Popular)
                            .boolean()
                            .null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Pricing::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Pricing::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pricing::Table).to_owned())
            .await
    }
}
