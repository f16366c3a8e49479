use entity::{ArtistColumn, ArtistEntity};
use sea_orm_migration::prelude::*;

use crate::{add_columns, typed_column};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        add_columns(
            manager,
            ArtistEntity,
            vec![
                typed_column(ArtistColumn::WebsiteLink),
                typed_column(ArtistColumn::SeekingVenue)
                    .not_null()
                    .default(false)
                    .to_owned(),
                typed_column(ArtistColumn::SeekingDescription),
            ],
        )
        .await
    }
}
