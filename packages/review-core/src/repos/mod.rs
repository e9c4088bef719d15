//! Repository functions for the domain layer.

pub mod books;
pub mod genres;
pub mod reviews;
pub mod shelf;
pub mod users;
