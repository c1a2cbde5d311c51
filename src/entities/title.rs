use sea_orm::{FromJsonQueryResult, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// Ordered list of free-text values kept in a single JSON column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "titles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub tmdb_id: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub overview: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub keywords: StringList,
    #[sea_orm(column_type = "Json")]
    pub genres: StringList,
    #[sea_orm(column_type = "Json")]
    pub actors: StringList,
    #[sea_orm(column_type = "Json")]
    pub directors: StringList,
    pub release_year: Option<i16>,
    pub rating: Option<i16>,
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::favourite_title::Entity")]
    FavouriteTitle,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::favourite_title::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavouriteTitle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
