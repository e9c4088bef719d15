//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert here so every caller sees
//! the constraint that actually failed rather than a backend error string.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract table.column from SQLite "UNIQUE constraint failed: table.column" error messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    // SQLite format: "UNIQUE constraint failed: table.column"
    if let Some(prefix) = error_msg.find("UNIQUE constraint failed: ") {
        let rest = &error_msg[prefix + "UNIQUE constraint failed: ".len()..];
        return rest.split_whitespace().next().map(|tc| tc.trim_end_matches(','));
    }
    None
}

/// Map SQLite table.column format to domain-specific conflict errors.
fn map_sqlite_table_column_to_conflict(table_column: &str) -> Option<(ConflictKind, &'static str)> {
    match table_column {
        "users.email" => Some((ConflictKind::UniqueEmail, "Email already registered")),
        "genres.name" => Some((ConflictKind::UniqueGenreName, "Genre name already exists")),
        tc if tc.starts_with("books_genres.") => Some((
            ConflictKind::DuplicateAssociation,
            "Book is already linked to this genre",
        )),
        _ => None,
    }
}

/// Map PostgreSQL constraint names to domain-specific conflict errors.
fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("ux_users_email") || error_msg.contains("users_email_key") {
        return Some((ConflictKind::UniqueEmail, "Email already registered"));
    }
    if error_msg.contains("ux_genres_name") || error_msg.contains("genres_name_key") {
        return Some((ConflictKind::UniqueGenreName, "Genre name already exists"));
    }
    if error_msg.contains("books_genres_pkey") || error_msg.contains("pk-books_genres") {
        return Some((
            ConflictKind::DuplicateAssociation,
            "Book is already linked to this genre",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError`.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(raw_error = %error_msg, "Unique constraint violation");

        // Try to extract table.column from SQLite format errors first
        if let Some(table_column) = extract_sqlite_table_column(&error_msg) {
            if let Some((kind, detail)) = map_sqlite_table_column_to_conflict(table_column) {
                return DomainError::conflict(kind, detail);
            }
        }

        // Check for PostgreSQL constraint name patterns
        if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::conflict(
            ConflictKind::ForeignKey,
            "Foreign key constraint violation",
        );
    }

    error!(raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_unique_email_maps_to_unique_email_conflict() {
        let err = sea_orm::DbErr::Custom(
            "error returned from database: (code: 2067) UNIQUE constraint failed: users.email"
                .into(),
        );
        let mapped = map_db_err(err);
        assert!(matches!(
            mapped,
            DomainError::Conflict(ConflictKind::UniqueEmail, _)
        ));
    }

    #[test]
    fn sqlite_composite_pk_maps_to_duplicate_association() {
        let err = sea_orm::DbErr::Custom(
            "UNIQUE constraint failed: books_genres.book_id, books_genres.genre_id".into(),
        );
        let mapped = map_db_err(err);
        assert!(matches!(
            mapped,
            DomainError::Conflict(ConflictKind::DuplicateAssociation, _)
        ));
    }

    #[test]
    fn postgres_unique_genre_name_maps_to_conflict() {
        let err = sea_orm::DbErr::Custom(
            "duplicate key value violates unique constraint \"ux_genres_name\"".into(),
        );
        let mapped = map_db_err(err);
        assert!(matches!(
            mapped,
            DomainError::Conflict(ConflictKind::UniqueGenreName, _)
        ));
    }

    #[test]
    fn foreign_key_violation_maps_to_foreign_key_conflict() {
        let err = sea_orm::DbErr::Custom("FOREIGN KEY constraint failed".into());
        let mapped = map_db_err(err);
        assert!(matches!(
            mapped,
            DomainError::Conflict(ConflictKind::ForeignKey, _)
        ));
    }

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = sea_orm::DbErr::RecordNotFound("reviews".into());
        let mapped = map_db_err(err);
        assert!(matches!(mapped, DomainError::NotFound(_, _)));
    }
}
