use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    Name,
    Company,
    Role,
    Content,
    Rating,
    Avatar,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testimonials::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Testimonials::Name).string().not_null())
                    .col(ColumnDef::new(Testimonials::Company).string().null())
                    .col(ColumnDef::new(Testimonials::Role).string().null())
                    .col(ColumnDef::new(Testimonials::Content).text().null())
                    // 1-5 expected, unchecked.
                    .col(ColumnDef::new(Testimonials::Rating).integer().null())
                    .col(ColumnDef::new(Testimonials::Avatar).string().null())
                    .col(
                        ColumnDef::new(Testimonials::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Testimonials::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await
    }
}
