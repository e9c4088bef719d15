//! SeaORM adapter for the genre repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::genres;

pub mod dto;

pub use dto::GenreCreate;

// Adapter functions return DbErr; the repos layer maps to DomainError via map_db_err.

pub async fn create_genre<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GenreCreate,
) -> Result<genres::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let genre_active = genres::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        created_at: Set(now),
        updated_at: Set(now),
    };

    genre_active.insert(conn).await
}

pub async fn find_genre_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    genre_id: i64,
) -> Result<Option<genres::Model>, sea_orm::DbErr> {
    genres::Entity::find_by_id(genre_id).one(conn).await
}

pub async fn find_genre_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<genres::Model>, sea_orm::DbErr> {
    genres::Entity::find()
        .filter(genres::Column::Name.eq(name))
        .one(conn)
        .await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    genre_ids: Vec<i64>,
) -> Result<Vec<genres::Model>, sea_orm::DbErr> {
    genres::Entity::find()
        .filter(genres::Column::Id.is_in(genre_ids))
        .order_by_asc(genres::Column::Id)
        .all(conn)
        .await
}

pub async fn delete_genre<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    genre_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = genres::Entity::delete_by_id(genre_id).exec(conn).await?;
    Ok(result.rows_affected)
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<genres::Model>, sea_orm::DbErr> {
    genres::Entity::find()
        .order_by_asc(genres::Column::Id)
        .all(conn)
        .await
}
