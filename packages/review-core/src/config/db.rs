use std::env;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Database profile enum for different environments
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Resolves a database URL from environment variables based on profile.
pub fn db_url(profile: DbProfile) -> Result<String, DomainError> {
    match profile {
        DbProfile::Prod => must_var("DATABASE_URL"),
        DbProfile::Test => {
            let url = env::var("TEST_DATABASE_URL")
                .unwrap_or_else(|_| "sqlite::memory:".to_string());
            // Enforce safety: test databases are wiped on every run
            if !is_test_safe(&url) {
                return Err(DomainError::infra(
                    InfraErrorKind::Config,
                    format!(
                        "Test profile requires an in-memory database or a database name ending with '_test', but got: '{url}'"
                    ),
                ));
            }
            Ok(url)
        }
    }
}

fn is_test_safe(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory") || url.ends_with("_test")
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, DomainError> {
    env::var(name).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::Config,
            format!("{name} environment variable is required"),
        )
    })
}
