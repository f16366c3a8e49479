use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::genres::Genres;

#[derive(Serialize, Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Artist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "String(Some(120))", nullable)]
    pub city: Option<String>,
    #[sea_orm(column_type = "String(Some(120))", nullable)]
    pub state: Option<String>,
    #[sea_orm(column_type = "String(Some(120))", nullable)]
    pub phone: Option<String>,
    #[sea_orm(column_type = "String(Some(120))", nullable)]
    pub genres: Option<String>,
    #[sea_orm(column_type = "String(Some(500))", nullable)]
    pub image_link: Option<String>,
    #[sea_orm(column_type = "String(Some(120))", nullable)]
    pub facebook_link: Option<String>,
    #[sea_orm(column_type = "String(Some(120))", nullable)]
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    #[sea_orm(column_type = "String(Some(500))", nullable)]
    pub seeking_description: Option<String>,
}

impl Model {
    pub fn genre_list(&self) -> Genres {
        Genres::decode(self.genres.as_deref())
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::show::Entity")]
    Show,
}

impl Related<super::show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Show.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
