use review_core::errors::domain::{ConflictKind, DomainError};
use review_core::repos::{books, genres, shelf};
use serial_test::serial;
use test_support::db::fresh_db;

/// Test: attach then query both directions of the association
#[tokio::test]
#[serial]
async fn test_attach_genre_symmetry() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let book = books::create_book(&db, "Linked", "Press").await?;
    let genre = genres::create_genre(&db, "Fantasy").await?;

    let inserted = shelf::attach_genre(&db, book.id, genre.id).await?;
    assert!(inserted, "first attach should insert a join row");

    let genres_of = shelf::genres_of_book(&db, book.id).await?;
    assert_eq!(genres_of.len(), 1);
    assert_eq!(genres_of[0].id, genre.id);

    let books_of = shelf::books_of_genre(&db, genre.id).await?;
    assert_eq!(books_of.len(), 1);
    assert_eq!(books_of[0].id, book.id);

    assert!(shelf::is_attached(&db, book.id, genre.id).await?);

    Ok(())
}

/// Test: attaching the same pair twice is a no-op and leaves one join row
#[tokio::test]
#[serial]
async fn test_attach_genre_idempotent() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let book = books::create_book(&db, "Twice", "Press").await?;
    let genre = genres::create_genre(&db, "Mystery").await?;

    assert!(shelf::attach_genre(&db, book.id, genre.id).await?);
    assert!(
        !shelf::attach_genre(&db, book.id, genre.id).await?,
        "second attach should be a no-op"
    );

    let genres_of = shelf::genres_of_book(&db, book.id).await?;
    assert_eq!(genres_of.len(), 1, "pair must appear exactly once");

    Ok(())
}

/// Test: attach_genre_strict fails with DuplicateAssociation on a linked pair
#[tokio::test]
#[serial]
async fn test_attach_genre_strict_duplicate() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let book = books::create_book(&db, "Strict", "Press").await?;
    let genre = genres::create_genre(&db, "Thriller").await?;

    shelf::attach_genre_strict(&db, book.id, genre.id).await?;

    let err = shelf::attach_genre_strict(&db, book.id, genre.id)
        .await
        .expect_err("expected DuplicateAssociation");
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::DuplicateAssociation, _)
    ));

    Ok(())
}

/// Test: attaching with a nonexistent endpoint is a constraint violation
#[tokio::test]
#[serial]
async fn test_attach_genre_dangling_reference() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let book = books::create_book(&db, "Half", "Press").await?;
    let genre = genres::create_genre(&db, "Romance").await?;

    let err = shelf::attach_genre(&db, book.id, 999_999_999)
        .await
        .expect_err("expected FK conflict for nonexistent genre");
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::ForeignKey, _)
    ));

    let err = shelf::attach_genre(&db, 999_999_999, genre.id)
        .await
        .expect_err("expected FK conflict for nonexistent book");
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::ForeignKey, _)
    ));

    Ok(())
}

/// Test: detach removes the join row from both directions
#[tokio::test]
#[serial]
async fn test_detach_genre() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let book = books::create_book(&db, "Detached", "Press").await?;
    let genre = genres::create_genre(&db, "Horror").await?;

    shelf::attach_genre(&db, book.id, genre.id).await?;
    assert!(shelf::detach_genre(&db, book.id, genre.id).await?);

    assert!(shelf::genres_of_book(&db, book.id).await?.is_empty());
    assert!(shelf::books_of_genre(&db, genre.id).await?.is_empty());
    assert!(!shelf::is_attached(&db, book.id, genre.id).await?);

    // Detaching an unlinked pair reports that nothing was removed
    assert!(!shelf::detach_genre(&db, book.id, genre.id).await?);

    Ok(())
}

/// Test: deleting a book cascades its join rows but leaves the genre
#[tokio::test]
#[serial]
async fn test_delete_book_cascades_join_rows() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let book = books::create_book(&db, "Cascading", "Press").await?;
    let genre = genres::create_genre(&db, "Biography").await?;
    shelf::attach_genre(&db, book.id, genre.id).await?;

    books::delete_book(&db, book.id).await?;

    assert!(shelf::books_of_genre(&db, genre.id).await?.is_empty());
    assert!(genres::find_genre_by_id(&db, genre.id).await?.is_some());

    Ok(())
}

/// Test: deleting a genre cascades its join rows but leaves the book
#[tokio::test]
#[serial]
async fn test_delete_genre_cascades_join_rows() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let book = books::create_book(&db, "Remaining", "Press").await?;
    let genre = genres::create_genre(&db, "Business").await?;
    shelf::attach_genre(&db, book.id, genre.id).await?;

    genres::delete_genre(&db, genre.id).await?;

    assert!(shelf::genres_of_book(&db, book.id).await?.is_empty());
    assert!(books::find_book_by_id(&db, book.id).await?.is_some());

    Ok(())
}
