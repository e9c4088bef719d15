//! Review repository functions for the domain layer.
//!
//! A review links exactly one user and one book and carries a bounded score.
//! Referential integrity is enforced at write time, so `user_of`/`book_of`
//! only fail when the review's endpoint has genuinely gone missing.

use sea_orm::ConnectionTrait;

use crate::adapters::reviews_sea as reviews_adapter;
use crate::adapters::reviews_sea::ReviewCreate;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;
use crate::repos::books::{self, Book};
use crate::repos::users::{self, User};

pub const MIN_SCORE: i16 = 1;
pub const MAX_SCORE: i16 = 5;

/// Review domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    pub score: i16,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

fn check_score(score: i16) -> Result<(), DomainError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(DomainError::validation(format!(
            "score must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
        )));
    }
    Ok(())
}

/// Creates a review. The score must be within `MIN_SCORE..=MAX_SCORE`;
/// referencing a nonexistent user or book fails with a foreign-key conflict.
pub async fn create_review<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    book_id: i64,
    score: i16,
) -> Result<Review, DomainError> {
    check_score(score)?;
    let review = reviews_adapter::create_review(conn, ReviewCreate::new(user_id, book_id, score))
        .await
        .map_err(map_db_err)?;
    Ok(Review::from(review))
}

pub async fn find_review_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review_id: i64,
) -> Result<Option<Review>, DomainError> {
    let review = reviews_adapter::find_review_by_id(conn, review_id)
        .await
        .map_err(map_db_err)?;
    Ok(review.map(Review::from))
}

/// Like `find_review_by_id`, but a missing row is an error.
pub async fn require_review<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review_id: i64,
) -> Result<Review, DomainError> {
    find_review_by_id(conn, review_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Review,
            format!("Review {review_id} not found"),
        )
    })
}

/// All reviews written by the user, in no required order.
pub async fn reviews_of_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Review>, DomainError> {
    let reviews = reviews_adapter::find_all_by_user(conn, user_id)
        .await
        .map_err(map_db_err)?;
    Ok(reviews.into_iter().map(Review::from).collect())
}

/// All reviews of the book, in no required order.
pub async fn reviews_of_book<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    book_id: i64,
) -> Result<Vec<Review>, DomainError> {
    let reviews = reviews_adapter::find_all_by_book(conn, book_id)
        .await
        .map_err(map_db_err)?;
    Ok(reviews.into_iter().map(Review::from).collect())
}

/// The user who wrote the review.
pub async fn user_of<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review: &Review,
) -> Result<User, DomainError> {
    users::require_user(conn, review.user_id).await
}

/// The book the review is about.
pub async fn book_of<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review: &Review,
) -> Result<Book, DomainError> {
    books::require_book(conn, review.book_id).await
}

pub async fn update_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review_id: i64,
    score: i16,
) -> Result<Review, DomainError> {
    check_score(score)?;
    require_review(conn, review_id).await?;
    let review = reviews_adapter::update_score(conn, review_id, score)
        .await
        .map_err(map_db_err)?;
    Ok(Review::from(review))
}

pub async fn delete_review<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    review_id: i64,
) -> Result<(), DomainError> {
    let rows = reviews_adapter::delete_review(conn, review_id)
        .await
        .map_err(map_db_err)?;
    if rows == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Review,
            format!("Review {review_id} not found"),
        ));
    }
    Ok(())
}

// Conversions between SeaORM models and domain models

impl From<crate::entities::reviews::Model> for Review {
    fn from(model: crate::entities::reviews::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            book_id: model.book_id,
            score: model.score,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::check_score;

    #[test]
    fn scores_inside_bounds_pass() {
        for score in 1..=5 {
            assert!(check_score(score).is_ok());
        }
    }

    #[test]
    fn scores_outside_bounds_fail() {
        assert!(check_score(0).is_err());
        assert!(check_score(6).is_err());
        assert!(check_score(-1).is_err());
    }
}
