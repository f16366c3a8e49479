use entity::{
    ArtistColumn, ArtistEntity, ShowColumn, ShowEntity, VenueColumn, VenueEntity,
};
use sea_orm_migration::prelude::*;

use crate::typed_column;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VenueEntity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VenueColumn::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(typed_column(VenueColumn::Name).not_null())
                    .col(&mut typed_column(VenueColumn::City))
                    .col(&mut typed_column(VenueColumn::State))
                    .col(&mut typed_column(VenueColumn::Address))
                    .col(&mut typed_column(VenueColumn::Phone))
                    .col(&mut typed_column(VenueColumn::ImageLink))
                    .col(&mut typed_column(VenueColumn::FacebookLink))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArtistEntity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArtistColumn::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(typed_column(ArtistColumn::Name).not_null())
                    .col(&mut typed_column(ArtistColumn::City))
                    .col(&mut typed_column(ArtistColumn::State))
                    .col(&mut typed_column(ArtistColumn::Phone))
                    .col(&mut typed_column(ArtistColumn::Genres))
                    .col(&mut typed_column(ArtistColumn::ImageLink))
                    .col(&mut typed_column(ArtistColumn::FacebookLink))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShowEntity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShowColumn::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ShowColumn::ArtistId).integer().not_null())
                    .col(ColumnDef::new(ShowColumn::VenueId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-show-artist_id")
                            .from(ShowEntity, ShowColumn::ArtistId)
                            .to(ArtistEntity, ArtistColumn::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-show-venue_id")
                            .from(ShowEntity, ShowColumn::VenueId)
                            .to(VenueEntity, VenueColumn::Id),
                    )
                    .to_owned(),
            )
            .await
    }
}
