use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WasteLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WasteLogs::LogId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WasteLogs::UserId).string().not_null())
                    .col(ColumnDef::new(WasteLogs::BusinessId).string().not_null())
                    .col(ColumnDef::new(WasteLogs::WasteType).string().not_null())
                    .col(ColumnDef::new(WasteLogs::Weight).double().not_null())
                    .col(ColumnDef::new(WasteLogs::Location).string().not_null())
                    .col(
                        ColumnDef::new(WasteLogs::TrashImageLink)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(WasteLogs::CreatedAt).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waste_logs_user_id")
                            .from(WasteLogs::Table, WasteLogs::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Index on user_id for per-user history queries
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_waste_logs_user")
                    .table(WasteLogs::Table)
                    .col(WasteLogs::UserId)
                    .to_owned(),
            )
            .await?;

        // Index on business_id for admin reporting queries
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_waste_logs_business")
                    .table(WasteLogs::Table)
                    .col(WasteLogs::BusinessId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Leaderboards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Leaderboards::BusinessId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Leaderboards::CompanyName).string())
                    .col(
                        ColumnDef::new(Leaderboards::SeasonalWaste)
                            .string()
                            .not_null()
                            .default("0"),
                    )
                    .col(
                        ColumnDef::new(Leaderboards::LastSeasonReset)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Leaderboards::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(WasteLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WasteLogs {
    Table,
    LogId,
    UserId,
    BusinessId,
    WasteType,
    Weight,
    Location,
    TrashImageLink,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Leaderboards {
    Table,
    BusinessId,
    CompanyName,
    SeasonalWaste,
    LastSeasonReset,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    UserId,
}
