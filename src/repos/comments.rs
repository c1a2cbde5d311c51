use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::{CommentRepo, NewComment};
use crate::{entities::comment, error::AppResult};

#[derive(Clone)]
pub struct SeaCommentRepo {
    db: DatabaseConnection,
}

impl SeaCommentRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepo for SeaCommentRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<comment::Model>> {
        Ok(comment::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> AppResult<Vec<comment::Model>> {
        Ok(comment::Entity::find().all(&self.db).await?)
    }

    async fn find_all_by_user(&self, user_id: Uuid) -> AppResult<Vec<comment::Model>> {
        let rows = comment::Entity::find()
            .filter(comment::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_all_by_title(&self, title_id: Uuid) -> AppResult<Vec<comment::Model>> {
        let rows = comment::Entity::find()
            .filter(comment::Column::TitleId.eq(title_id))
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn create(&self, comment: NewComment) -> AppResult<comment::Model> {
        let model = comment::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(comment.user_id),
            title_id: Set(comment.title_id),
            rating: Set(comment.rating),
            info: Set(comment.info),
            created_at: Set(comment.created_at),
        };
        Ok(model.insert(&self.db).await?)
    }

    // The owning user and title never change after creation.
    async fn save(&self, comment: comment::Model) -> AppResult<comment::Model> {
        let model = comment::ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(comment.id),
            rating: Set(comment.rating),
            info: Set(comment.info),
            created_at: Set(comment.created_at),
            ..Default::default()
        };
        Ok(model.update(&self.db).await?)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        comment::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
