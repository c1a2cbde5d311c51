use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::{FavouriteRepo, NewFavourite};
use crate::{entities::favourite_title, error::AppResult};

#[derive(Clone)]
pub struct SeaFavouriteRepo {
    db: DatabaseConnection,
}

impl SeaFavouriteRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavouriteRepo for SeaFavouriteRepo {
    async fn exists_by_id(&self, id: Uuid) -> AppResult<bool> {
        let count = favourite_title::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn find_all(&self) -> AppResult<Vec<favourite_title::Model>> {
        Ok(favourite_title::Entity::find().all(&self.db).await?)
    }

    async fn find_all_by_user(&self, user_id: Uuid) -> AppResult<Vec<favourite_title::Model>> {
        let rows = favourite_title::Entity::find()
            .filter(favourite_title::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn create(&self, favourite: NewFavourite) -> AppResult<favourite_title::Model> {
        let model = favourite_title::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(favourite.user_id),
            title_id: Set(favourite.title_id),
        };
        Ok(model.insert(&self.db).await?)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        favourite_title::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
