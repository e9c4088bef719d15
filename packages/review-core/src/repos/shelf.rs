//! Book-genre association functions for the domain layer.
//!
//! One physical join table keyed by the composite (book_id, genre_id) pair;
//! `genres_of_book` and `books_of_genre` are the two indexed lookups over it.
//! Either side may initiate or remove the association.

use sea_orm::ConnectionTrait;

use crate::adapters::books_sea as books_adapter;
use crate::adapters::genres_sea as genres_adapter;
use crate::adapters::shelf_sea as shelf_adapter;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::infra::db_errors::map_db_err;
use crate::repos::books::Book;
use crate::repos::genres::Genre;

/// Links the genre to the book. Attaching an already-linked pair is a no-op;
/// the return value reports whether a new join row was inserted.
pub async fn attach_genre<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
    genre_id: i64,
) -> Result<bool, DomainError> {
    shelf_adapter::attach(conn, book_id, genre_id)
        .await
        .map_err(map_db_err)
}

/// Links the genre to the book, failing with `DuplicateAssociation` when the
/// pair is already linked.
pub async fn attach_genre_strict<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
    genre_id: i64,
) -> Result<(), DomainError> {
    let inserted = attach_genre(conn, book_id, genre_id).await?;
    if !inserted {
        return Err(DomainError::conflict(
            ConflictKind::DuplicateAssociation,
            format!("Book {book_id} is already linked to genre {genre_id}"),
        ));
    }
    Ok(())
}

/// Unlinks the genre from the book. Returns whether a join row was removed.
pub async fn detach_genre<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
    genre_id: i64,
) -> Result<bool, DomainError> {
    shelf_adapter::detach(conn, book_id, genre_id)
        .await
        .map_err(map_db_err)
}

pub async fn is_attached<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
    genre_id: i64,
) -> Result<bool, DomainError> {
    let link = shelf_adapter::find_link(conn, book_id, genre_id)
        .await
        .map_err(map_db_err)?;
    Ok(link.is_some())
}

/// The genres associated with the book, in no required order.
pub async fn genres_of_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Vec<Genre>, DomainError> {
    let links = shelf_adapter::find_all_by_book(conn, book_id)
        .await
        .map_err(map_db_err)?;
    if links.is_empty() {
        return Ok(Vec::new());
    }

    let genre_ids: Vec<i64> = links.iter().map(|link| link.genre_id).collect();
    let genres = genres_adapter::find_by_ids(conn, genre_ids)
        .await
        .map_err(map_db_err)?;
    Ok(genres.into_iter().map(Genre::from).collect())
}

/// The books associated with the genre, in no required order.
pub async fn books_of_genre<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    genre_id: i64,
) -> Result<Vec<Book>, DomainError> {
    let links = shelf_adapter::find_all_by_genre(conn, genre_id)
        .await
        .map_err(map_db_err)?;
    if links.is_empty() {
        return Ok(Vec::new());
    }

    let book_ids: Vec<i64> = links.iter().map(|link| link.book_id).collect();
    let books = books_adapter::find_by_ids(conn, book_ids)
        .await
        .map_err(map_db_err)?;
    Ok(books.into_iter().map(Book::from).collect())
}
