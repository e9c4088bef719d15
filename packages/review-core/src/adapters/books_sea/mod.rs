//! SeaORM adapter for the book repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::books;

pub mod dto;

pub use dto::{BookCreate, BookUpdate};

// Adapter functions return DbErr; the repos layer maps to DomainError via map_db_err.

pub async fn create_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BookCreate,
) -> Result<books::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let book_active = books::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        publisher: Set(dto.publisher),
        created_at: Set(now),
        updated_at: Set(now),
    };

    book_active.insert(conn).await
}

pub async fn find_book_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Option<books::Model>, sea_orm::DbErr> {
    books::Entity::find_by_id(book_id).one(conn).await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_ids: Vec<i64>,
) -> Result<Vec<books::Model>, sea_orm::DbErr> {
    books::Entity::find()
        .filter(books::Column::Id.is_in(book_ids))
        .order_by_asc(books::Column::Id)
        .all(conn)
        .await
}

pub async fn update_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BookUpdate,
) -> Result<books::Model, sea_orm::DbErr> {
    let book = books::ActiveModel {
        id: Set(dto.id),
        title: Set(dto.title),
        publisher: Set(dto.publisher),
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };
    book.update(conn).await
}

pub async fn delete_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = books::Entity::delete_by_id(book_id).exec(conn).await?;
    Ok(result.rows_affected)
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<books::Model>, sea_orm::DbErr> {
    books::Entity::find()
        .order_by_asc(books::Column::Id)
        .all(conn)
        .await
}
