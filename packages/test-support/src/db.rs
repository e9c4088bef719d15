//! Test database provisioning
//!
//! Connects to the test database and brings its schema up to date. Defaults
//! to an in-memory SQLite database so the suite is self-contained; set
//! `TEST_DATABASE_URL` to run against something else (the database name must
//! end with `_test`).

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Loads the test environment from the .env.test file, if present.
pub fn load_test_env() {
    dotenvy::from_filename(".env.test").ok();
}

/// Resolves the test database URL from the environment.
pub fn test_db_url() -> String {
    std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string())
}

/// Asserts that the URL is safe to wipe: in-memory SQLite, or a database
/// whose name ends with '_test'. Panics otherwise.
pub fn assert_test_db_url(url: &str) {
    let in_memory = url.contains(":memory:") || url.contains("mode=memory");
    if !in_memory && !url.ends_with("_test") {
        panic!(
            "Tests must run against an in-memory database or one ending with '_test'. Current TEST_DATABASE_URL: {url}"
        );
    }
}

/// Provisions a fresh, fully migrated test database and returns a connection.
///
/// Every call wipes and re-creates the schema, so each test starts from an
/// empty relationship graph.
pub async fn fresh_db() -> DatabaseConnection {
    super::logging::init();
    load_test_env();

    let url = test_db_url();
    assert_test_db_url(&url);

    let mut opts = ConnectOptions::new(url);
    // An in-memory SQLite database lives inside a single connection; a wider
    // pool would hand out empty databases. One connection is enough for tests
    // on any backend.
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to test database");

    Migrator::fresh(&db)
        .await
        .expect("Failed to migrate test database");

    db
}
