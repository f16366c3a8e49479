use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ColumnTrait;

mod m20230210_000001_create_tables;
mod m20230210_000002_venue_details;
mod m20230210_000003_show_start_time;
mod m20230211_000001_artist_details;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230210_000001_create_tables::Migration),
            Box::new(m20230210_000002_venue_details::Migration),
            Box::new(m20230210_000003_show_start_time::Migration),
            Box::new(m20230211_000001_artist_details::Migration),
        ]
    }
}

/// Column definition carrying the type declared on the entity.
pub(crate) fn typed_column<C>(column: C) -> ColumnDef
where
    C: ColumnTrait + Iden + 'static,
{
    let column_type = column.def().get_column_type().clone();
    ColumnDef::new_with_type(column, column_type)
}

/// SQLite accepts a single alteration per statement, so every added column
/// gets its own `ALTER TABLE`.
pub(crate) async fn add_columns<T>(
    manager: &SchemaManager<'_>,
    table: T,
    columns: Vec<ColumnDef>,
) -> Result<(), DbErr>
where
    T: Iden + Copy + 'static,
{
    for mut column in columns {
        let mut binding = Table::alter();
        let statement = binding.table(table).add_column(&mut column);
        manager.alter_table(statement.to_owned()).await?;
    }
    Ok(())
}
