use std::sync::Arc;

use uuid::Uuid;

use crate::{
    entities::user,
    error::{AppError, AppResult, EMAIL_TAKEN, EntityKind, LOGIN_TAKEN},
    models::{UserCredentials, UserProfile, UserRegister, UserResponse, UserUpdate},
    repos::{NewUser, UserRepo},
};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepo>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepo>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, req: UserRegister) -> AppResult<Uuid> {
        if self.repo.exists_by_email(&req.email).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }
        if self.repo.exists_by_login(&req.login).await? {
            return Err(AppError::Conflict(LOGIN_TAKEN.to_string()));
        }

        let user = self
            .repo
            .create(NewUser {
                login: req.login,
                email: req.email,
                password: req.password,
                name: req.name,
                state: req.state,
            })
            .await?;

        tracing::info!(user_id = %user.id, login = %user.login, "user registered");
        Ok(user.id)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<UserResponse> {
        Ok(to_response(self.get_entity(id).await?))
    }

    pub async fn get_profile(&self, id: Uuid) -> AppResult<UserProfile> {
        Ok(to_profile(self.get_entity(id).await?))
    }

    pub async fn get_all(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.repo.find_all().await?;
        Ok(users.into_iter().map(to_response).collect())
    }

    /// Applies only the fields present in `patch`. A new login is checked
    /// against every other user before it is adopted.
    pub async fn update(&self, id: Uuid, patch: UserUpdate) -> AppResult<UserResponse> {
        let mut user = self.get_entity(id).await?;

        if let Some(login) = patch.login {
            if login != user.login {
                if let Some(existing) = self.repo.find_by_login(&login).await? {
                    if existing.id != id {
                        return Err(AppError::Conflict(LOGIN_TAKEN.to_string()));
                    }
                }
                user.login = login;
            }
        }

        if let Some(name) = patch.user_name {
            user.name = name;
        }
        if let Some(password) = patch.password {
            user.password = password;
        }

        let user = self.repo.save(user).await?;
        Ok(to_response(user))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let user = self.get_entity(id).await?;
        self.repo.delete(user.id).await?;
        tracing::info!(user_id = %id, "user deleted");
        Ok(true)
    }

    /// Resolves a login/password pair to a user id. Passwords are stored and
    /// compared as given.
    pub async fn authenticate(&self, creds: UserCredentials) -> AppResult<Uuid> {
        let Some(user) = self.repo.find_by_login(&creds.login).await? else {
            return Err(AppError::Unauthorized);
        };
        if user.password != creds.password {
            return Err(AppError::Unauthorized);
        }
        Ok(user.id)
    }

    pub(crate) async fn get_entity(&self, id: Uuid) -> AppResult<user::Model> {
        self.repo.find_by_id(id).await?.ok_or_else(|| AppError::not_found(EntityKind::User, id))
    }
}

fn to_response(u: user::Model) -> UserResponse {
    UserResponse { user_id: u.id, user_name: u.name, login: u.login, state: u.state }
}

fn to_profile(u: user::Model) -> UserProfile {
    UserProfile { user_id: u.id, user_name: u.name, email: u.email, login: u.login, state: u.state }
}
