use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string().not_null())
                    .col(ColumnDef::new(Movies::Description).string().null())
                    .col(ColumnDef::new(Movies::PosterUrl).string().null())
                    .col(ColumnDef::new(Movies::ReleaseYear).integer().null())
                    .col(ColumnDef::new(Movies::Quality).string().null())
                    .col(ColumnDef::new(Movies::Category).string().null())
                    .col(ColumnDef::new(Movies::Size).string().null())
                    .col(ColumnDef::new(Movies::Language).string().null())
                    .col(ColumnDef::new(Movies::DownloadLinks).string().null())
                    .col(
                        ColumnDef::new(Movies::IsTrending)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Movies::CreatedAt)
                            .string()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_owned()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Movies {
    Table,
    Id,
    Title,
    Description,
    PosterUrl,
    ReleaseYear,
    Quality,
    Category,
    Size,
    Language,
    DownloadLinks,
    IsTrending,
    CreatedAt,
}
