//! SeaORM adapter for the review repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::reviews;

pub mod dto;

pub use dto::ReviewCreate;

// Adapter functions return DbErr; the repos layer maps to DomainError via map_db_err.

pub async fn create_review<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ReviewCreate,
) -> Result<reviews::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let review_active = reviews::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        book_id: Set(dto.book_id),
        score: Set(dto.score),
        created_at: Set(now),
        updated_at: Set(now),
    };

    review_active.insert(conn).await
}

pub async fn find_review_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review_id: i64,
) -> Result<Option<reviews::Model>, sea_orm::DbErr> {
    reviews::Entity::find_by_id(review_id).one(conn).await
}

pub async fn find_all_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<reviews::Model>, sea_orm::DbErr> {
    reviews::Entity::find()
        .filter(reviews::Column::UserId.eq(user_id))
        .order_by_asc(reviews::Column::Id)
        .all(conn)
        .await
}

pub async fn find_all_by_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Vec<reviews::Model>, sea_orm::DbErr> {
    reviews::Entity::find()
        .filter(reviews::Column::BookId.eq(book_id))
        .order_by_asc(reviews::Column::Id)
        .all(conn)
        .await
}

pub async fn update_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review_id: i64,
    score: i16,
) -> Result<reviews::Model, sea_orm::DbErr> {
    let review = reviews::ActiveModel {
        id: Set(review_id),
        user_id: NotSet,
        book_id: NotSet,
        score: Set(score),
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };
    review.update(conn).await
}

pub async fn delete_review<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = reviews::Entity::delete_by_id(review_id).exec(conn).await?;
    Ok(result.rows_affected)
}
