use review_core::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use review_core::repos::genres;
use serial_test::serial;
use test_support::db::fresh_db;

/// Test: create_genre and lookups by id and name
#[tokio::test]
#[serial]
async fn test_create_genre_and_find_roundtrip() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let created = genres::create_genre(&db, "Fantasy").await?;
    assert!(created.id > 0, "Genre ID should be positive");
    assert_eq!(created.name, "Fantasy");

    let by_id = genres::find_genre_by_id(&db, created.id).await?;
    assert_eq!(by_id.as_ref().map(|genre| genre.id), Some(created.id));

    let by_name = genres::find_genre_by_name(&db, "Fantasy").await?;
    assert_eq!(by_name.map(|genre| genre.id), Some(created.id));

    Ok(())
}

/// Test: duplicate genre name returns a typed unique violation
#[tokio::test]
#[serial]
async fn test_create_genre_duplicate_name_unique_violation() -> Result<(), DomainError> {
    let db = fresh_db().await;

    genres::create_genre(&db, "Mystery").await?;

    let err = genres::create_genre(&db, "Mystery")
        .await
        .expect_err("expected unique name conflict");
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::UniqueGenreName, _)
    ));

    Ok(())
}

/// Test: find_genre_by_name returns None for an unknown name
#[tokio::test]
#[serial]
async fn test_find_genre_by_name_not_found() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let result = genres::find_genre_by_name(&db, "No Such Genre").await?;
    assert!(result.is_none());

    Ok(())
}

/// Test: require_genre returns a typed NotFound error for non-existent genre
#[tokio::test]
#[serial]
async fn test_require_genre_not_found() {
    let db = fresh_db().await;

    let err = genres::require_genre(&db, 999_999_999_i64)
        .await
        .expect_err("expected NotFound");
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Genre, _)));
}

/// Test: delete_genre removes the row
#[tokio::test]
#[serial]
async fn test_delete_genre() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let created = genres::create_genre(&db, "Ephemeral").await?;
    genres::delete_genre(&db, created.id).await?;

    assert!(genres::find_genre_by_id(&db, created.id).await?.is_none());

    Ok(())
}

/// Test: list_genres returns every created genre
#[tokio::test]
#[serial]
async fn test_list_genres() -> Result<(), DomainError> {
    let db = fresh_db().await;

    genres::create_genre(&db, "Horror").await?;
    genres::create_genre(&db, "Romance").await?;

    let all = genres::list_genres(&db).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
