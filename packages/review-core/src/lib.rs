//! Data-modeling layer for a book-review application.
//!
//! Four entities (users, books, genres, reviews) plus the book-genre join,
//! with explicit association accessors in `repos`, SeaORM adapters in
//! `adapters`, and factory-based fixtures in `fixtures`.

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod fixtures;
pub mod infra;
pub mod repos;
pub mod telemetry;

// Re-exports for public API
pub use config::db::{db_url, DbProfile};
pub use db::txn::with_txn;
pub use errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
pub use fixtures::{BookFactory, GenreFactory, ReviewFactory, UserFactory, GENRE_NAME_POOL};
pub use repos::books::Book;
pub use repos::genres::Genre;
pub use repos::reviews::Review;
pub use repos::users::User;
