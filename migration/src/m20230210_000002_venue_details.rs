use entity::{VenueColumn, VenueEntity};
use sea_orm_migration::prelude::*;

use crate::{add_columns, typed_column};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        add_columns(
            manager,
            VenueEntity,
            vec![
                typed_column(VenueColumn::Genres),
                typed_column(VenueColumn::Website),
                typed_column(VenueColumn::SeekingTalent)
                    .not_null()
                    .default(false)
                    .to_owned(),
                typed_column(VenueColumn::SeekingDescription),
            ],
        )
        .await
    }
}
