use uuid::Uuid;

use super::*;
use crate::{
    db,
    error::{AppError, LOGIN_TAKEN},
};

fn new_user(login: &str) -> NewUser {
    NewUser {
        login: login.to_string(),
        email: format!("{login}@example.com"),
        password: "secret".to_string(),
        name: login.to_uppercase(),
        state: true,
    }
}

fn new_title(tmdb_id: &str, name: &str) -> NewTitle {
    NewTitle {
        tmdb_id: tmdb_id.to_string(),
        name: name.to_string(),
        overview: Some("A thief who steals corporate secrets".to_string()),
        keywords: vec!["dream".into(), "heist".into()],
        genres: vec!["sci-fi".into()],
        actors: vec!["DiCaprio".into()],
        directors: vec!["Nolan".into()],
        release_year: Some(2010),
        rating: Some(8),
        image_url: None,
    }
}

#[tokio::test]
async fn users_round_trip_through_sqlite() {
    let repo = SeaUserRepo::new(db::in_memory().await);

    let created = repo.create(new_user("neo")).await.unwrap();
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created.clone()));
    assert!(repo.exists_by_login("neo").await.unwrap());
    assert!(repo.exists_by_email("neo@example.com").await.unwrap());
    assert!(!repo.exists_by_login("trinity").await.unwrap());
    assert_eq!(repo.find_by_login("neo").await.unwrap().map(|u| u.id), Some(created.id));

    let mut patched = created.clone();
    patched.name = "The One".to_string();
    repo.save(patched).await.unwrap();
    let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "The One");
    assert_eq!(stored.login, "neo");

    repo.delete(created.id).await.unwrap();
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
}

#[tokio::test]
async fn duplicate_login_is_rejected_by_the_store() {
    let repo = SeaUserRepo::new(db::in_memory().await);
    repo.create(new_user("neo")).await.unwrap();

    let mut clash = new_user("neo");
    clash.email = "other@example.com".to_string();
    let err = repo.create(clash).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(ref msg) if msg == LOGIN_TAKEN), "got {err:?}");
}

#[tokio::test]
async fn titles_keep_their_lists() {
    let repo = SeaTitleRepo::new(db::in_memory().await);

    let created = repo.create(new_title("27205", "Inception")).await.unwrap();
    let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.keywords.0, vec!["dream".to_string(), "heist".to_string()]);
    assert_eq!(stored.directors.0, vec!["Nolan".to_string()]);
    assert!(repo.exists_by_tmdb_id("27205").await.unwrap());
    assert!(!repo.exists_by_tmdb_id("1").await.unwrap());

    repo.create(new_title("42", "Memento")).await.unwrap();
    let names: Vec<_> = repo.find_all().await.unwrap().into_iter().map(|t| t.name).collect();
    assert_eq!(names, ["Inception", "Memento"]);
}

#[tokio::test]
async fn comments_are_filtered_by_parent() {
    let db = db::in_memory().await;
    let users = SeaUserRepo::new(db.clone());
    let titles = SeaTitleRepo::new(db.clone());
    let comments = SeaCommentRepo::new(db);

    let neo = users.create(new_user("neo")).await.unwrap();
    let smith = users.create(new_user("smith")).await.unwrap();
    let inception = titles.create(new_title("1", "Inception")).await.unwrap();
    let memento = titles.create(new_title("2", "Memento")).await.unwrap();

    let pairs = [(neo.id, inception.id), (neo.id, memento.id), (smith.id, inception.id)];
    for (user_id, title_id) in pairs {
        comments
            .create(NewComment { user_id, title_id, rating: 7, info: None, created_at: 1_000 })
            .await
            .unwrap();
    }

    assert_eq!(comments.find_all().await.unwrap().len(), 3);
    assert_eq!(comments.find_all_by_user(neo.id).await.unwrap().len(), 2);
    assert_eq!(comments.find_all_by_title(inception.id).await.unwrap().len(), 2);
    assert!(comments.find_all_by_title(Uuid::new_v4()).await.unwrap().is_empty());
}

#[tokio::test]
async fn comment_save_keeps_owners() {
    let db = db::in_memory().await;
    let users = SeaUserRepo::new(db.clone());
    let titles = SeaTitleRepo::new(db.clone());
    let comments = SeaCommentRepo::new(db);

    let neo = users.create(new_user("neo")).await.unwrap();
    let title = titles.create(new_title("1", "Inception")).await.unwrap();
    let created = comments
        .create(NewComment {
            user_id: neo.id,
            title_id: title.id,
            rating: 3,
            info: Some("meh".into()),
            created_at: 1_000,
        })
        .await
        .unwrap();

    let mut edited = created.clone();
    edited.rating = 9;
    edited.info = Some("grew on me".into());
    edited.created_at = 2_000;
    let saved = comments.save(edited).await.unwrap();

    assert_eq!(saved.user_id, neo.id);
    assert_eq!(saved.title_id, title.id);
    assert_eq!(saved.rating, 9);
    assert_eq!(saved.created_at, 2_000);
}

#[tokio::test]
async fn favourites_allow_duplicate_pairs() {
    let db = db::in_memory().await;
    let users = SeaUserRepo::new(db.clone());
    let titles = SeaTitleRepo::new(db.clone());
    let favourites = SeaFavouriteRepo::new(db);

    let neo = users.create(new_user("neo")).await.unwrap();
    let title = titles.create(new_title("1", "Inception")).await.unwrap();
    let pair = NewFavourite { user_id: neo.id, title_id: title.id };

    let first = favourites.create(pair.clone()).await.unwrap();
    let second = favourites.create(pair).await.unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(favourites.find_all_by_user(neo.id).await.unwrap().len(), 2);

    assert!(favourites.exists_by_id(first.id).await.unwrap());
    favourites.delete(first.id).await.unwrap();
    assert!(!favourites.exists_by_id(first.id).await.unwrap());
    assert_eq!(favourites.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn referenced_user_cannot_be_deleted() {
    let db = db::in_memory().await;
    let users = SeaUserRepo::new(db.clone());
    let titles = SeaTitleRepo::new(db.clone());
    let favourites = SeaFavouriteRepo::new(db);

    let neo = users.create(new_user("neo")).await.unwrap();
    let title = titles.create(new_title("1", "Inception")).await.unwrap();
    favourites.create(NewFavourite { user_id: neo.id, title_id: title.id }).await.unwrap();

    let err = users.delete(neo.id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {err:?}");
}
