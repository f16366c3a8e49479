use entity::{ShowColumn, ShowEntity};
use sea_orm_migration::prelude::*;

use crate::{add_columns, typed_column};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        add_columns(
            manager,
            ShowEntity,
            vec![typed_column(ShowColumn::StartTime)],
        )
        .await
    }
}
