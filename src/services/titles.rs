use std::sync::Arc;

use rand::Rng;
use uuid::Uuid;

use crate::{
    entities::title,
    error::{AppError, AppResult, EntityKind},
    models::{TitleResponse, TitleUpsert},
    repos::{NewTitle, TitleRepo},
};

/// Candidate tmdb ids are drawn from `0..TMDB_ID_SPACE`.
pub const TMDB_ID_SPACE: u32 = 1_000_000;

/// Source of candidate tmdb ids.
pub type TmdbIdDraw = Arc<dyn Fn() -> u32 + Send + Sync>;

pub fn random_tmdb_id() -> u32 {
    rand::thread_rng().gen_range(0..TMDB_ID_SPACE)
}

#[derive(Clone)]
pub struct TitleService {
    repo: Arc<dyn TitleRepo>,
    draw: TmdbIdDraw,
}

impl TitleService {
    pub fn new(repo: Arc<dyn TitleRepo>) -> Self {
        Self { repo, draw: Arc::new(random_tmdb_id) }
    }

    #[cfg(test)]
    pub fn with_draw(repo: Arc<dyn TitleRepo>, draw: TmdbIdDraw) -> Self {
        Self { repo, draw }
    }

    pub async fn create(&self, req: TitleUpsert) -> AppResult<Uuid> {
        let tmdb_id = self.generate_unique_tmdb_id().await?;

        let title = self
            .repo
            .create(NewTitle {
                tmdb_id,
                name: req.name,
                overview: req.overview,
                keywords: req.keywords,
                genres: req.genres,
                actors: req.actors,
                directors: req.directors,
                release_year: req.release_year,
                rating: req.rating,
                image_url: req.image_url,
            })
            .await?;

        tracing::info!(title_id = %title.id, tmdb_id = %title.tmdb_id, "title created");
        Ok(title.id)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<TitleResponse> {
        Ok(to_response(self.get_entity(id).await?))
    }

    pub async fn get_all(&self) -> AppResult<Vec<TitleResponse>> {
        let titles = self.repo.find_all().await?;
        Ok(titles.into_iter().map(to_response).collect())
    }

    /// Replaces every editable field. The tmdb id is never touched.
    pub async fn update(&self, id: Uuid, req: TitleUpsert) -> AppResult<TitleResponse> {
        let mut title = self.get_entity(id).await?;

        title.name = req.name;
        title.overview = req.overview;
        title.keywords = req.keywords.into();
        title.genres = req.genres.into();
        title.actors = req.actors.into();
        title.directors = req.directors.into();
        title.release_year = req.release_year;
        title.rating = req.rating;
        title.image_url = req.image_url;

        let title = self.repo.save(title).await?;
        Ok(to_response(title))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let title = self.get_entity(id).await?;
        self.repo.delete(title.id).await?;
        tracing::info!(title_id = %id, "title deleted");
        Ok(true)
    }

    pub(crate) async fn get_entity(&self, id: Uuid) -> AppResult<title::Model> {
        self.repo.find_by_id(id).await?.ok_or_else(|| AppError::not_found(EntityKind::Title, id))
    }

    // Redraws until the store reports no title with the candidate. There is
    // no attempt limit, and nothing stops a concurrent create from claiming
    // the same value between this check and the insert; the unique index on
    // titles.tmdb_id turns that into a Conflict.
    async fn generate_unique_tmdb_id(&self) -> AppResult<String> {
        loop {
            let candidate = (self.draw)().to_string();
            if !self.repo.exists_by_tmdb_id(&candidate).await? {
                return Ok(candidate);
            }
            tracing::debug!(%candidate, "tmdb id already taken, redrawing");
        }
    }
}

fn to_response(t: title::Model) -> TitleResponse {
    TitleResponse {
        id: t.id,
        tmdb_id: t.tmdb_id,
        name: t.name,
        overview: t.overview,
        keywords: t.keywords.0,
        genres: t.genres.0,
        actors: t.actors.0,
        directors: t.directors.0,
        release_year: t.release_year,
        rating: t.rating,
        image_url: t.image_url,
    }
}
