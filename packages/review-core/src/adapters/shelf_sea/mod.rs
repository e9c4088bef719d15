//! SeaORM adapter for the book-genre association.
//!
//! All operations go through the single books_genres table; both association
//! directions are indexed lookups over the same set of pairs.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entities::book_genres;

// Adapter functions return DbErr; the repos layer maps to DomainError via map_db_err.

/// Insert the (book, genre) pair. Returns whether a row was actually
/// inserted; an already-linked pair affects zero rows.
pub async fn attach<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
    genre_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let link = book_genres::ActiveModel {
        book_id: Set(book_id),
        genre_id: Set(genre_id),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    let rows = book_genres::Entity::insert(link)
        .on_conflict(
            OnConflict::columns([book_genres::Column::BookId, book_genres::Column::GenreId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(rows == 1)
}

/// Remove the (book, genre) pair. Returns whether a row was removed.
pub async fn detach<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
    genre_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let result = book_genres::Entity::delete_by_id((book_id, genre_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected == 1)
}

pub async fn find_link<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
    genre_id: i64,
) -> Result<Option<book_genres::Model>, sea_orm::DbErr> {
    book_genres::Entity::find_by_id((book_id, genre_id))
        .one(conn)
        .await
}

pub async fn find_all_by_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Vec<book_genres::Model>, sea_orm::DbErr> {
    book_genres::Entity::find()
        .filter(book_genres::Column::BookId.eq(book_id))
        .order_by_asc(book_genres::Column::GenreId)
        .all(conn)
        .await
}

pub async fn find_all_by_genre<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    genre_id: i64,
) -> Result<Vec<book_genres::Model>, sea_orm::DbErr> {
    book_genres::Entity::find()
        .filter(book_genres::Column::GenreId.eq(genre_id))
        .order_by_asc(book_genres::Column::BookId)
        .all(conn)
        .await
}
