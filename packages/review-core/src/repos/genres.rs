//! Genre repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::genres_sea as genres_adapter;
use crate::adapters::genres_sea::GenreCreate;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

/// Genre domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

/// Creates a genre. Names are unique; a duplicate fails with a
/// `UniqueGenreName` conflict.
pub async fn create_genre<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Genre, DomainError> {
    let genre = genres_adapter::create_genre(conn, GenreCreate::new(name))
        .await
        .map_err(map_db_err)?;
    Ok(Genre::from(genre))
}

pub async fn find_genre_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    genre_id: i64,
) -> Result<Option<Genre>, DomainError> {
    let genre = genres_adapter::find_genre_by_id(conn, genre_id)
        .await
        .map_err(map_db_err)?;
    Ok(genre.map(Genre::from))
}

pub async fn find_genre_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<Genre>, DomainError> {
    let genre = genres_adapter::find_genre_by_name(conn, name)
        .await
        .map_err(map_db_err)?;
    Ok(genre.map(Genre::from))
}

/// Like `find_genre_by_id`, but a missing row is an error.
pub async fn require_genre<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    genre_id: i64,
) -> Result<Genre, DomainError> {
    find_genre_by_id(conn, genre_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Genre, format!("Genre {genre_id} not found"))
    })
}

/// Deletes a genre. Join rows to books go with it.
pub async fn delete_genre<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    genre_id: i64,
) -> Result<(), DomainError> {
    let rows = genres_adapter::delete_genre(conn, genre_id)
        .await
        .map_err(map_db_err)?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Genre,
            format!("Genre {genre_id} not found"),
        ));
    }
    Ok(())
}

pub async fn list_genres<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Genre>, DomainError> {
    let genres = genres_adapter::find_all(conn).await.map_err(map_db_err)?;
    Ok(genres.into_iter().map(Genre::from).collect())
}

// Conversions between SeaORM models and domain models

impl From<crate::entities::genres::Model> for Genre {
    fn from(model: crate::entities::genres::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
