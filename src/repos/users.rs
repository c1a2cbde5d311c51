use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::{NewUser, UserRepo};
use crate::{entities::user, error::AppResult};

#[derive(Clone)]
pub struct SeaUserRepo {
    db: DatabaseConnection,
}

impl SeaUserRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepo for SeaUserRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<user::Model>> {
        Ok(user::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> AppResult<Vec<user::Model>> {
        Ok(user::Entity::find().all(&self.db).await?)
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<user::Model>> {
        let found = user::Entity::find()
            .filter(user::Column::Login.eq(login))
            .one(&self.db)
            .await?;
        Ok(found)
    }

    async fn exists_by_login(&self, login: &str) -> AppResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Login.eq(login))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn create(&self, user: NewUser) -> AppResult<user::Model> {
        let model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            login: Set(user.login),
            email: Set(user.email),
            password: Set(user.password),
            name: Set(user.name),
            state: Set(user.state),
        };
        Ok(model.insert(&self.db).await?)
    }

    async fn save(&self, user: user::Model) -> AppResult<user::Model> {
        let model: user::ActiveModel = user.into();
        Ok(model.reset_all().update(&self.db).await?)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        user::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
