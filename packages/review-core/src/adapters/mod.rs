//! SeaORM adapters for the persistence layer.

pub mod books_sea;
pub mod genres_sea;
pub mod reviews_sea;
pub mod shelf_sea;
pub mod users_sea;
