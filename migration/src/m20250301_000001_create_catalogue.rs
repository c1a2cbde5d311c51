use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_uuid(Users::Id))
                    .col(string(Users::Login))
                    .col(string(Users::Email))
                    .col(string(Users::Password))
                    .col(string(Users::Name))
                    .col(boolean(Users::State))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_login_unique")
                    .table(Users::Table)
                    .col(Users::Login)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_email_unique")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Titles::Table)
                    .if_not_exists()
                    .col(pk_uuid(Titles::Id))
                    .col(string(Titles::TmdbId))
                    .col(string(Titles::Name))
                    .col(text_null(Titles::Overview))
                    .col(json(Titles::Keywords))
                    .col(json(Titles::Genres))
                    .col(json(Titles::Actors))
                    .col(json(Titles::Directors))
                    .col(small_integer_null(Titles::ReleaseYear))
                    .col(small_integer_null(Titles::Rating))
                    .col(string_null(Titles::ImageUrl))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_titles_tmdb_id_unique")
                    .table(Titles::Table)
                    .col(Titles::TmdbId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(pk_uuid(Comments::Id))
                    .col(uuid(Comments::UserId))
                    .col(uuid(Comments::TitleId))
                    .col(small_integer(Comments::Rating))
                    .col(text_null(Comments::Info))
                    .col(big_integer(Comments::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_user")
                            .from(Comments::Table, Comments::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_title")
                            .from(Comments::Table, Comments::TitleId)
                            .to(Titles::Table, Titles::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_user")
                    .table(Comments::Table)
                    .col(Comments::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_title")
                    .table(Comments::Table)
                    .col(Comments::TitleId)
                    .to_owned(),
            )
            .await?;

        // No unique index on (user_id, title_id).
        manager
            .create_table(
                Table::create()
                    .table(FavouriteTitles::Table)
                    .if_not_exists()
                    .col(pk_uuid(FavouriteTitles::Id))
                    .col(uuid(FavouriteTitles::UserId))
                    .col(uuid(FavouriteTitles::TitleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourite_titles_user")
                            .from(FavouriteTitles::Table, FavouriteTitles::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourite_titles_title")
                            .from(FavouriteTitles::Table, FavouriteTitles::TitleId)
                            .to(Titles::Table, Titles::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favourite_titles_user")
                    .table(FavouriteTitles::Table)
                    .col(FavouriteTitles::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(FavouriteTitles::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Comments::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Titles::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Login,
    Email,
    Password,
    Name,
    State,
}

#[derive(DeriveIden)]
enum Titles {
    Table,
    Id,
    TmdbId,
    Name,
    Overview,
    Keywords,
    Genres,
    Actors,
    Directors,
    ReleaseYear,
    Rating,
    ImageUrl,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    UserId,
    TitleId,
    Rating,
    Info,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FavouriteTitles {
    Table,
    Id,
    UserId,
    TitleId,
}
