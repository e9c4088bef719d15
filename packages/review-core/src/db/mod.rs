//! Database connection and transaction helpers.

pub mod txn;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Opens a connection pool for the given database URL.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DomainError> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.sqlx_logging(false);

    // An in-memory SQLite database lives inside a single connection; a wider
    // pool would hand out empty databases.
    if url.contains(":memory:") || url.contains("mode=memory") {
        opts.max_connections(1).min_connections(1);
    }

    Database::connect(opts).await.map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DbUnavailable,
            format!("Failed to connect to database: {e}"),
        )
    })
}
