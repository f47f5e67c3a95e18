//! Record store abstraction shared by the PostgreSQL and in-memory backends

use async_trait::async_trait;

use super::models::{AnalyticsRecord, WaitlistEntry};
use crate::core::{AnalyticsEvent, WaitlistSignup};

/// Record store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The email is already on the waitlist
    #[error("Email already exists")]
    DuplicateKey,

    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return StoreError::DuplicateKey;
        }
        StoreError::DatabaseError(err)
    }
}

/// Insert-only store behind the landing page API
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a waitlist signup. Fails with [`StoreError::DuplicateKey`] if
    /// the email is already present.
    async fn insert_signup(&self, signup: &WaitlistSignup) -> Result<WaitlistEntry, StoreError>;

    /// Insert an analytics event
    async fn insert_event(&self, event: &AnalyticsEvent) -> Result<AnalyticsRecord, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_duplicates() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::DatabaseError(_)));

        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StoreError::DatabaseError(_)));
    }

    #[test]
    fn test_store_error_display() {
        assert_eq!(StoreError::DuplicateKey.to_string(), "Email already exists");
    }
}
