use review_core::errors::domain::{DomainError, NotFoundKind};
use review_core::repos::books;
use serial_test::serial;
use test_support::db::fresh_db;
use test_support::unique_str;

/// Test: create_book and find_book_by_id roundtrip
#[tokio::test]
#[serial]
async fn test_create_book_and_find_by_id_roundtrip() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let title = unique_str("title");
    let created = books::create_book(&db, &title, "Beacon House").await?;

    assert!(created.id > 0, "Book ID should be positive");
    assert_eq!(created.title, title);
    assert_eq!(created.publisher, "Beacon House");

    let found = books::find_book_by_id(&db, created.id).await?;
    assert!(found.is_some(), "Book should be found");
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.title, created.title);

    Ok(())
}

/// Test: require_book returns a typed NotFound error for non-existent book
#[tokio::test]
#[serial]
async fn test_require_book_not_found() {
    let db = fresh_db().await;

    let err = books::require_book(&db, 999_999_999_i64)
        .await
        .expect_err("expected NotFound");
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Book, _)));
}

/// Test: update_book replaces title and publisher
#[tokio::test]
#[serial]
async fn test_update_book() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let created = books::create_book(&db, "Old Title", "Old Press").await?;
    let updated = books::update_book(&db, created.id, "New Title", "New Press").await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.publisher, "New Press");

    let found = books::require_book(&db, created.id).await?;
    assert_eq!(found.title, "New Title");

    Ok(())
}

/// Test: update_book on a non-existent id reports NotFound
#[tokio::test]
#[serial]
async fn test_update_book_not_found() {
    let db = fresh_db().await;

    let err = books::update_book(&db, 999_999_999_i64, "Title", "Press")
        .await
        .expect_err("expected NotFound");
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Book, _)));
}

/// Test: delete_book removes the row; deleting again reports NotFound
#[tokio::test]
#[serial]
async fn test_delete_book() -> Result<(), DomainError> {
    let db = fresh_db().await;

    let created = books::create_book(&db, "Short Lived", "Gone Press").await?;
    books::delete_book(&db, created.id).await?;

    assert!(books::find_book_by_id(&db, created.id).await?.is_none());

    let err = books::delete_book(&db, created.id)
        .await
        .expect_err("expected NotFound on second delete");
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Book, _)));

    Ok(())
}

/// Test: list_books returns every created book
#[tokio::test]
#[serial]
async fn test_list_books() -> Result<(), DomainError> {
    let db = fresh_db().await;

    assert!(books::list_books(&db).await?.is_empty());

    let a = books::create_book(&db, "First", "P1").await?;
    let b = books::create_book(&db, "Second", "P2").await?;

    let all = books::list_books(&db).await?;
    assert_eq!(all.len(), 2);
    let ids: Vec<i64> = all.iter().map(|book| book.id).collect();
    assert!(ids.contains(&a.id));
    assert!(ids.contains(&b.id));

    Ok(())
}
