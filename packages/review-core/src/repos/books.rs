//! Book repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::books_sea as books_adapter;
use crate::adapters::books_sea::{BookCreate, BookUpdate};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

/// Book domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub publisher: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

pub async fn create_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
    publisher: &str,
) -> Result<Book, DomainError> {
    let book = books_adapter::create_book(conn, BookCreate::new(title, publisher))
        .await
        .map_err(map_db_err)?;
    Ok(Book::from(book))
}

pub async fn find_book_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Option<Book>, DomainError> {
    let book = books_adapter::find_book_by_id(conn, book_id)
        .await
        .map_err(map_db_err)?;
    Ok(book.map(Book::from))
}

/// Like `find_book_by_id`, but a missing row is an error.
pub async fn require_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Book, DomainError> {
    find_book_by_id(conn, book_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Book, format!("Book {book_id} not found"))
    })
}

pub async fn update_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
    title: &str,
    publisher: &str,
) -> Result<Book, DomainError> {
    require_book(conn, book_id).await?;
    let book = books_adapter::update_book(conn, BookUpdate::new(book_id, title, publisher))
        .await
        .map_err(map_db_err)?;
    Ok(Book::from(book))
}

/// Deletes a book. Join rows to genres go with it; surviving reviews make
/// the delete fail with a foreign-key conflict.
pub async fn delete_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<(), DomainError> {
    let rows = books_adapter::delete_book(conn, book_id)
        .await
        .map_err(map_db_err)?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Book,
            format!("Book {book_id} not found"),
        ));
    }
    Ok(())
}

pub async fn list_books<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Book>, DomainError> {
    let books = books_adapter::find_all(conn).await.map_err(map_db_err)?;
    Ok(books.into_iter().map(Book::from).collect())
}

// Conversions between SeaORM models and domain models

impl From<crate::entities::books::Model> for Book {
    fn from(model: crate::entities::books::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            publisher: model.publisher,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
