//! DTOs for genres_sea adapter.

/// DTO for creating a new genre.
#[derive(Debug, Clone)]
pub struct GenreCreate {
    pub name: String,
}

impl GenreCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
