use std::sync::Arc;

use jiff::Timestamp;
use uuid::Uuid;

use crate::{
    entities::comment,
    error::{AppError, AppResult, EntityKind},
    models::{CommentCreate, CommentResponse, CommentUpdate},
    repos::{CommentRepo, NewComment, TitleRepo, UserRepo},
};

#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentRepo>,
    users: Arc<dyn UserRepo>,
    titles: Arc<dyn TitleRepo>,
}

impl CommentService {
    pub fn new(
        comments: Arc<dyn CommentRepo>,
        users: Arc<dyn UserRepo>,
        titles: Arc<dyn TitleRepo>,
    ) -> Self {
        Self { comments, users, titles }
    }

    /// Checks run in a fixed order: user, then title, then rating.
    pub async fn create(&self, req: CommentCreate) -> AppResult<Uuid> {
        let user = self
            .users
            .find_by_id(req.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::User, req.user_id))?;
        let title = self
            .titles
            .find_by_id(req.title_id)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Title, req.title_id))?;
        let rating = validate_rating(req.rating)?;

        let comment = self
            .comments
            .create(NewComment {
                user_id: user.id,
                title_id: title.id,
                rating,
                info: req.info,
                created_at: now_ms(),
            })
            .await?;

        tracing::info!(
            comment_id = %comment.id,
            user_id = %user.id,
            title_id = %title.id,
            "comment created"
        );
        Ok(comment.id)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<CommentResponse> {
        to_response(self.get_entity(id).await?)
    }

    pub async fn get_all(&self) -> AppResult<Vec<CommentResponse>> {
        self.comments.find_all().await?.into_iter().map(to_response).collect()
    }

    pub async fn get_all_by_user(&self, user_id: Uuid) -> AppResult<Vec<CommentResponse>> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::not_found(EntityKind::User, user_id));
        }
        self.comments.find_all_by_user(user_id).await?.into_iter().map(to_response).collect()
    }

    pub async fn get_all_by_title(&self, title_id: Uuid) -> AppResult<Vec<CommentResponse>> {
        if self.titles.find_by_id(title_id).await?.is_none() {
            return Err(AppError::not_found(EntityKind::Title, title_id));
        }
        self.comments.find_all_by_title(title_id).await?.into_iter().map(to_response).collect()
    }

    /// Replaces rating and text and stamps the comment with the current time.
    pub async fn update(&self, id: Uuid, req: CommentUpdate) -> AppResult<CommentResponse> {
        let mut comment = self.get_entity(id).await?;

        comment.rating = validate_rating(req.rating)?;
        comment.info = req.info;
        comment.created_at = now_ms();

        to_response(self.comments.save(comment).await?)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let comment = self.get_entity(id).await?;
        self.comments.delete(comment.id).await?;
        tracing::info!(comment_id = %id, "comment deleted");
        Ok(true)
    }

    async fn get_entity(&self, id: Uuid) -> AppResult<comment::Model> {
        self.comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Comment, id))
    }
}

fn validate_rating(rating: i32) -> AppResult<i16> {
    i16::try_from(rating).ok().filter(|r| (0..=10).contains(r)).ok_or_else(|| {
        AppError::InvalidInput(format!("Rating must be in range 0..10, but got: {rating}"))
    })
}

fn now_ms() -> i64 {
    Timestamp::now().as_millisecond()
}

fn to_response(c: comment::Model) -> AppResult<CommentResponse> {
    Ok(CommentResponse {
        id: c.id,
        user_id: c.user_id,
        title_id: c.title_id,
        creation_date: Timestamp::from_millisecond(c.created_at)?,
        rating: c.rating,
        info: c.info,
    })
}
