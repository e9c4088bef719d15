//! DTOs for books_sea adapter.

/// DTO for creating a new book.
#[derive(Debug, Clone)]
pub struct BookCreate {
    pub title: String,
    pub publisher: String,
}

impl BookCreate {
    pub fn new(title: impl Into<String>, publisher: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            publisher: publisher.into(),
        }
    }
}

/// DTO for updating an existing book.
#[derive(Debug, Clone)]
pub struct BookUpdate {
    pub id: i64,
    pub title: String,
    pub publisher: String,
}

impl BookUpdate {
    pub fn new(id: i64, title: impl Into<String>, publisher: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            publisher: publisher.into(),
        }
    }
}
