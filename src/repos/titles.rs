use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::{NewTitle, TitleRepo};
use crate::{entities::title, error::AppResult};

#[derive(Clone)]
pub struct SeaTitleRepo {
    db: DatabaseConnection,
}

impl SeaTitleRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TitleRepo for SeaTitleRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<title::Model>> {
        Ok(title::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> AppResult<Vec<title::Model>> {
        Ok(title::Entity::find().all(&self.db).await?)
    }

    async fn exists_by_tmdb_id(&self, tmdb_id: &str) -> AppResult<bool> {
        let count = title::Entity::find()
            .filter(title::Column::TmdbId.eq(tmdb_id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn create(&self, title: NewTitle) -> AppResult<title::Model> {
        let model = title::ActiveModel {
            id: Set(Uuid::new_v4()),
            tmdb_id: Set(title.tmdb_id),
            name: Set(title.name),
            overview: Set(title.overview),
            keywords: Set(title.keywords.into()),
            genres: Set(title.genres.into()),
            actors: Set(title.actors.into()),
            directors: Set(title.directors.into()),
            release_year: Set(title.release_year),
            rating: Set(title.rating),
            image_url: Set(title.image_url),
        };
        Ok(model.insert(&self.db).await?)
    }

    async fn save(&self, title: title::Model) -> AppResult<title::Model> {
        let model: title::ActiveModel = title.into();
        Ok(model.reset_all().update(&self.db).await?)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        title::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
