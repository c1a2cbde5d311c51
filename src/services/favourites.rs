use std::sync::Arc;

use uuid::Uuid;

use crate::{
    entities::favourite_title,
    error::{AppError, AppResult, EntityKind},
    models::{FavCreate, FavResponse},
    repos::{FavouriteRepo, NewFavourite, TitleRepo, UserRepo},
};

#[derive(Clone)]
pub struct FavouriteService {
    favourites: Arc<dyn FavouriteRepo>,
    users: Arc<dyn UserRepo>,
    titles: Arc<dyn TitleRepo>,
}

impl FavouriteService {
    pub fn new(
        favourites: Arc<dyn FavouriteRepo>,
        users: Arc<dyn UserRepo>,
        titles: Arc<dyn TitleRepo>,
    ) -> Self {
        Self { favourites, users, titles }
    }

    /// The same (user, title) pair may be favourited more than once.
    pub async fn create(&self, req: FavCreate) -> AppResult<Uuid> {
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

        let fav = self
            .favourites
            .create(NewFavourite { user_id: user.id, title_id: title.id })
            .await?;

        tracing::info!(
            fav_id = %fav.id,
            user_id = %user.id,
            title_id = %title.id,
            "favourite added"
        );
        Ok(fav.id)
    }

    pub async fn get_all(&self) -> AppResult<Vec<FavResponse>> {
        let favs = self.favourites.find_all().await?;
        Ok(favs.into_iter().map(to_response).collect())
    }

    pub async fn get_all_by_user(&self, user_id: Uuid) -> AppResult<Vec<FavResponse>> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::not_found(EntityKind::User, user_id));
        }
        let favs = self.favourites.find_all_by_user(user_id).await?;
        Ok(favs.into_iter().map(to_response).collect())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        if !self.favourites.exists_by_id(id).await? {
            return Err(AppError::not_found(EntityKind::Favourite, id));
        }
        self.favourites.delete(id).await?;
        tracing::info!(fav_id = %id, "favourite removed");
        Ok(true)
    }
}

fn to_response(f: favourite_title::Model) -> FavResponse {
    FavResponse { fav_id: f.id, title_id: f.title_id, user_id: f.user_id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::{title, user},
        repos::{MockFavouriteRepo, MockTitleRepo, MockUserRepo},
    };

    fn a_user(id: Uuid) -> user::Model {
        user::Model {
            id,
            login: "neo".into(),
            email: "neo@example.com".into(),
            password: "p".into(),
            name: "Neo".into(),
            state: true,
        }
    }

    fn a_title(id: Uuid) -> title::Model {
        title::Model {
            id,
            tmdb_id: "7".into(),
            name: "Memento".into(),
            overview: None,
            keywords: Default::default(),
            genres: Default::default(),
            actors: Default::default(),
            directors: Default::default(),
            release_year: None,
            rating: None,
            image_url: None,
        }
    }

    fn fav(user_id: Uuid, title_id: Uuid) -> favourite_title::Model {
        favourite_title::Model { id: Uuid::new_v4(), user_id, title_id }
    }

    fn service(
        favourites: MockFavouriteRepo,
        users: MockUserRepo,
        titles: MockTitleRepo,
    ) -> FavouriteService {
        FavouriteService::new(Arc::new(favourites), Arc::new(users), Arc::new(titles))
    }

    #[tokio::test]
    async fn create_saves_pair_and_returns_id() {
        let (user_id, title_id) = (Uuid::new_v4(), Uuid::new_v4());
        let mut users = MockUserRepo::new();
        users.expect_find_by_id().return_once(|id| Ok(Some(a_user(id))));
        let mut titles = MockTitleRepo::new();
        titles.expect_find_by_id().return_once(|id| Ok(Some(a_title(id))));
        let mut favourites = MockFavouriteRepo::new();
        favourites
            .expect_create()
            .withf(move |f| f.user_id == user_id && f.title_id == title_id)
            .times(1)
            .return_once(|f| Ok(fav(f.user_id, f.title_id)));

        let id = service(favourites, users, titles)
            .create(FavCreate { title_id, user_id })
            .await
            .unwrap();
        assert!(!id.is_nil());
    }

    #[tokio::test]
    async fn create_allows_duplicate_pairs() {
        let (user_id, title_id) = (Uuid::new_v4(), Uuid::new_v4());
        let mut users = MockUserRepo::new();
        users.expect_find_by_id().times(2).returning(|id| Ok(Some(a_user(id))));
        let mut titles = MockTitleRepo::new();
        titles.expect_find_by_id().times(2).returning(|id| Ok(Some(a_title(id))));
        let mut favourites = MockFavouriteRepo::new();
        favourites.expect_create().times(2).returning(|f| Ok(fav(f.user_id, f.title_id)));

        let svc = service(favourites, users, titles);
        let first = svc.create(FavCreate { title_id, user_id }).await.unwrap();
        let second = svc.create(FavCreate { title_id, user_id }).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn create_requires_existing_user() {
        let mut users = MockUserRepo::new();
        users.expect_find_by_id().return_once(|_| Ok(None));
        let mut titles = MockTitleRepo::new();
        titles.expect_find_by_id().times(0);
        let mut favourites = MockFavouriteRepo::new();
        favourites.expect_create().times(0);

        let req = FavCreate { title_id: Uuid::new_v4(), user_id: Uuid::new_v4() };
        let user_id = req.user_id;
        let err = service(favourites, users, titles).create(req).await.unwrap_err();
        assert_eq!(err.to_string(), format!("User with id {user_id} is not found"));
    }

    #[tokio::test]
    async fn create_requires_existing_title() {
        let mut users = MockUserRepo::new();
        users.expect_find_by_id().return_once(|id| Ok(Some(a_user(id))));
        let mut titles = MockTitleRepo::new();
        titles.expect_find_by_id().return_once(|_| Ok(None));
        let mut favourites = MockFavouriteRepo::new();
        favourites.expect_create().times(0);

        let err = service(favourites, users, titles)
            .create(FavCreate { title_id: Uuid::new_v4(), user_id: Uuid::new_v4() })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { kind: EntityKind::Title, .. }));
    }

    #[tokio::test]
    async fn get_all_by_user_maps_favourites() {
        let user_id = Uuid::new_v4();
        let (t1, t2) = (Uuid::new_v4(), Uuid::new_v4());
        let mut users = MockUserRepo::new();
        users.expect_find_by_id().return_once(|id| Ok(Some(a_user(id))));
        let mut favourites = MockFavouriteRepo::new();
        favourites
            .expect_find_all_by_user()
            .withf(move |id| *id == user_id)
            .return_once(move |id| Ok(vec![fav(id, t1), fav(id, t2)]));

        let res = service(favourites, users, MockTitleRepo::new())
            .get_all_by_user(user_id)
            .await
            .unwrap();
        let titles: Vec<_> = res.iter().map(|f| f.title_id).collect();
        assert_eq!(titles, [t1, t2]);
        assert!(res.iter().all(|f| f.user_id == user_id));
    }

    #[tokio::test]
    async fn get_all_by_user_requires_existing_user() {
        let mut users = MockUserRepo::new();
        users.expect_find_by_id().return_once(|_| Ok(None));
        let mut favourites = MockFavouriteRepo::new();
        favourites.expect_find_all_by_user().times(0);

        let err = service(favourites, users, MockTitleRepo::new())
            .get_all_by_user(Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { kind: EntityKind::User, .. }));
    }

    #[tokio::test]
    async fn get_all_lists_every_favourite() {
        let mut favourites = MockFavouriteRepo::new();
        favourites.expect_find_all().return_once(|| {
            Ok(vec![fav(Uuid::new_v4(), Uuid::new_v4()), fav(Uuid::new_v4(), Uuid::new_v4())])
        });

        let all = service(favourites, MockUserRepo::new(), MockTitleRepo::new())
            .get_all()
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn delete_checks_existence_then_removes() {
        let id = Uuid::new_v4();
        let mut favourites = MockFavouriteRepo::new();
        favourites.expect_exists_by_id().withf(move |f| *f == id).return_once(|_| Ok(true));
        favourites.expect_delete().withf(move |f| *f == id).times(1).return_once(|_| Ok(()));

        let deleted = service(favourites, MockUserRepo::new(), MockTitleRepo::new())
            .delete(id)
            .await
            .unwrap();
        assert!(deleted);
    }

    #[tokio::test]
    async fn delete_missing_favourite_issues_no_delete() {
        let id = Uuid::new_v4();
        let mut favourites = MockFavouriteRepo::new();
        favourites.expect_exists_by_id().return_once(|_| Ok(false));
        favourites.expect_delete().times(0);

        let err = service(favourites, MockUserRepo::new(), MockTitleRepo::new())
            .delete(id)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), format!("Favourite with id {id} is not found"));
    }
}
