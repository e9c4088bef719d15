use std::collections::HashSet;

use review_core::errors::domain::DomainError;
use review_core::fixtures::{
    BookFactory, GenreFactory, ReviewFactory, UserFactory, GENRE_NAME_POOL,
};
use review_core::repos::{books, genres, reviews, users};
use serial_test::serial;
use test_support::db::fresh_db;

/// Test: default user factory output is valid, and emails never collide
#[tokio::test]
#[serial]
async fn test_user_factory_defaults() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let first = UserFactory::new().create(&db).await?;
    let second = UserFactory::new().create(&db).await?;

    assert!(!first.name.is_empty());
    assert!(first.email.contains('@'));
    assert_ne!(first.email, second.email, "emails must stay unique");

    assert!(users::find_user_by_id(&db, first.id).await?.is_some());

    Ok(())
}

/// Test: overrides pin fields while the rest stays randomized
#[tokio::test]
#[serial]
async fn test_factory_overrides_pin_fields() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let user = UserFactory::new()
        .name("Pinned Name")
        .email("pinned@example.test")
        .create(&db)
        .await?;
    assert_eq!(user.name, "Pinned Name");
    assert_eq!(user.email, "pinned@example.test");

    let book = BookFactory::new()
        .title("Pinned Title")
        .create(&db)
        .await?;
    assert_eq!(book.title, "Pinned Title");
    assert!(!book.publisher.is_empty(), "publisher stays randomized");

    let genre = GenreFactory::new().name("Pinned Genre").create(&db).await?;
    assert_eq!(genre.name, "Pinned Genre");

    let review = ReviewFactory::new()
        .user_id(user.id)
        .book_id(book.id)
        .score(5)
        .create(&db)
        .await?;
    assert_eq!(review.user_id, user.id);
    assert_eq!(review.book_id, book.id);
    assert_eq!(review.score, 5);

    Ok(())
}

/// Test: ten default genres drain the candidate pool without collisions,
/// and the eleventh still gets a unique name
#[tokio::test]
#[serial]
async fn test_genre_factory_pool_uniqueness() -> Result<(), DomainError> {
    let db = fresh_db().await;

    for _ in 0..GENRE_NAME_POOL.len() {
        GenreFactory::new().create(&db).await?;
    }

    let all = genres::list_genres(&db).await?;
    assert_eq!(all.len(), GENRE_NAME_POOL.len());

    let names: HashSet<String> = all.iter().map(|genre| genre.name.clone()).collect();
    assert_eq!(names.len(), GENRE_NAME_POOL.len(), "names must be distinct");
    for name in &names {
        assert!(
            GENRE_NAME_POOL.contains(&name.as_str()),
            "{name} should come from the candidate pool"
        );
    }

    // Pool exhausted: the next draw still satisfies the uniqueness invariant
    let overflow = GenreFactory::new().create(&db).await?;
    assert!(!names.contains(&overflow.name));

    Ok(())
}

/// Test: default review factory creates valid endpoints and an in-bounds score
#[tokio::test]
#[serial]
async fn test_review_factory_defaults() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let review = ReviewFactory::new().create(&db).await?;

    assert!((reviews::MIN_SCORE..=reviews::MAX_SCORE).contains(&review.score));
    assert!(users::find_user_by_id(&db, review.user_id).await?.is_some());
    assert!(books::find_book_by_id(&db, review.book_id).await?.is_some());

    let of_book = reviews::reviews_of_book(&db, review.book_id).await?;
    assert_eq!(of_book.len(), 1);

    Ok(())
}
