pub mod book_genres;
pub mod books;
pub mod genres;
pub mod reviews;
pub mod users;

pub use book_genres::Entity as BookGenres;
pub use book_genres::Model as BookGenre;
pub use books::Entity as Books;
pub use books::Model as Book;
pub use genres::Entity as Genres;
pub use genres::Model as Genre;
pub use reviews::Entity as Reviews;
pub use reviews::Model as Review;
pub use users::Entity as Users;
pub use users::Model as User;
