//! Factories for generating valid entity instances.
//!
//! Each factory produces a randomized entity that satisfies every schema
//! invariant, with optional overrides to pin specific fields. Factories
//! persist through the repos layer, so factory output went through the same
//! validation as any other write.

use std::collections::HashSet;

use rand::Rng;
use sea_orm::ConnectionTrait;
use ulid::Ulid;

use crate::errors::domain::DomainError;
use crate::repos::books::{self, Book};
use crate::repos::genres::{self, Genre};
use crate::repos::reviews::{self, Review, MAX_SCORE, MIN_SCORE};
use crate::repos::users::{self, User};

/// Candidate pool for genre names. `GenreFactory` draws from it with a
/// uniqueness check against the rows already persisted.
pub const GENRE_NAME_POOL: [&str; 10] = [
    "Science Fiction",
    "Fantasy",
    "Mystery",
    "Thriller",
    "Romance",
    "Horror",
    "Historical Fiction",
    "Biography",
    "Self-Help",
    "Business",
];

const FIRST_NAMES: [&str; 8] = [
    "Ada", "Grace", "Alan", "Margaret", "Edsger", "Barbara", "Donald", "Radia",
];

const LAST_NAMES: [&str; 8] = [
    "Lovelace", "Hopper", "Turing", "Hamilton", "Dijkstra", "Liskov", "Knuth", "Perlman",
];

const TITLE_ADJECTIVES: [&str; 8] = [
    "Silent", "Burning", "Forgotten", "Crimson", "Endless", "Hollow", "Gilded", "Restless",
];

const TITLE_NOUNS: [&str; 8] = [
    "Garden", "Archive", "Harbor", "Orchard", "Citadel", "Meridian", "Lantern", "Causeway",
];

const PUBLISHERS: [&str; 6] = [
    "Beacon House",
    "Quill & Crane",
    "Northlight Press",
    "Harbinger Books",
    "Foxglove Editions",
    "Marginalia Press",
];

fn pick<'a>(pool: &[&'a str]) -> &'a str {
    let mut rng = rand::rng();
    pool[rng.random_range(0..pool.len())]
}

/// Factory for `User` rows. Defaults: a random name and a unique email.
#[derive(Debug, Clone, Default)]
pub struct UserFactory {
    name: Option<String>,
    email: Option<String>,
}

impl UserFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        self,
        conn: &C,
    ) -> Result<User, DomainError> {
        let name = self
            .name
            .unwrap_or_else(|| format!("{} {}", pick(&FIRST_NAMES), pick(&LAST_NAMES)));
        let email = self
            .email
            .unwrap_or_else(|| format!("reader-{}@example.test", Ulid::new()));
        users::create_user(conn, &name, &email).await
    }
}

/// Factory for `Book` rows. Defaults: a random title and publisher.
#[derive(Debug, Clone, Default)]
pub struct BookFactory {
    title: Option<String>,
    publisher: Option<String>,
}

impl BookFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        self,
        conn: &C,
    ) -> Result<Book, DomainError> {
        let title = self
            .title
            .unwrap_or_else(|| format!("The {} {}", pick(&TITLE_ADJECTIVES), pick(&TITLE_NOUNS)));
        let publisher = self
            .publisher
            .unwrap_or_else(|| pick(&PUBLISHERS).to_string());
        books::create_book(conn, &title, &publisher).await
    }
}

/// Factory for `Genre` rows. The default name is a uniqueness-checked random
/// draw from `GENRE_NAME_POOL`.
#[derive(Debug, Clone, Default)]
pub struct GenreFactory {
    name: Option<String>,
}

impl GenreFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        self,
        conn: &C,
    ) -> Result<Genre, DomainError> {
        let name = match self.name {
            Some(name) => name,
            None => draw_genre_name(conn).await?,
        };
        genres::create_genre(conn, &name).await
    }
}

/// Draws a random genre name not yet persisted. Once the pool is exhausted
/// the drawn name gets a ULID suffix, so the uniqueness invariant holds for
/// any number of genres.
async fn draw_genre_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<String, DomainError> {
    let taken: HashSet<String> = genres::list_genres(conn)
        .await?
        .into_iter()
        .map(|genre| genre.name)
        .collect();

    let available: Vec<&str> = GENRE_NAME_POOL
        .iter()
        .copied()
        .filter(|name| !taken.contains(*name))
        .collect();

    if available.is_empty() {
        return Ok(format!("{} {}", pick(&GENRE_NAME_POOL), Ulid::new()));
    }

    let mut rng = rand::rng();
    Ok(available[rng.random_range(0..available.len())].to_string())
}

/// Factory for `Review` rows. Unpinned endpoints are created through
/// `UserFactory`/`BookFactory`; the default score is a random in-bounds value.
#[derive(Debug, Clone, Default)]
pub struct ReviewFactory {
    user_id: Option<i64>,
    book_id: Option<i64>,
    score: Option<i16>,
}

impl ReviewFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn book_id(mut self, book_id: i64) -> Self {
        self.book_id = Some(book_id);
        self
    }

    pub fn score(mut self, score: i16) -> Self {
        self.score = Some(score);
        self
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        self,
        conn: &C,
    ) -> Result<Review, DomainError> {
        let user_id = match self.user_id {
            Some(id) => id,
            None => UserFactory::new().create(conn).await?.id,
        };
        let book_id = match self.book_id {
            Some(id) => id,
            None => BookFactory::new().create(conn).await?.id,
        };
        let score = self
            .score
            .unwrap_or_else(|| rand::rng().random_range(MIN_SCORE..=MAX_SCORE));

        reviews::create_review(conn, user_id, book_id, score).await
    }
}
