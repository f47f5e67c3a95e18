//! PostgreSQL record store
//!
//! Duplicate signups are detected by the unique index on `waitlist.email`,
//! not by a read-before-write.

use async_trait::async_trait;
use sqlx::PgPool;

use super::models::{AnalyticsRecord, WaitlistEntry};
use super::store::{RecordStore, StoreError};
use crate::core::{AnalyticsEvent, WaitlistSignup};

#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count stored signups
    pub async fn count_signups(&self) -> Result<i64, StoreError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM waitlist")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert_signup(&self, signup: &WaitlistSignup) -> Result<WaitlistEntry, StoreError> {
        let entry = sqlx::query_as::<_, WaitlistEntry>(
            r#"
            INSERT INTO waitlist (email, idea)
            VALUES ($1, $2)
            RETURNING id, email, idea, created_at
            "#,
        )
        .bind(&signup.email)
        .bind(&signup.idea)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn insert_event(&self, event: &AnalyticsEvent) -> Result<AnalyticsRecord, StoreError> {
        let draft = AnalyticsRecord::from_event(event);

        let record = sqlx::query_as::<_, AnalyticsRecord>(
            r#"
            INSERT INTO analytics_events
                (event_type, device_type, browser, screen_width, screen_height, referrer)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, event_type, device_type, browser, screen_width, screen_height,
                      referrer, created_at
            "#,
        )
        .bind(&draft.event_type)
        .bind(&draft.device_type)
        .bind(&draft.browser)
        .bind(draft.screen_width)
        .bind(draft.screen_height)
        .bind(&draft.referrer)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::db::{DbConfig, create_pool_with_migrations};
    use uuid::Uuid;

    async fn test_store() -> PgRecordStore {
        let config = DbConfig::from_config(&Config::from_env()).expect("DATABASE_URL must be set");
        let pool = create_pool_with_migrations(&config)
            .await
            .expect("Failed to create pool");
        PgRecordStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires running PostgreSQL database"]
    async fn test_insert_signup_and_duplicate() {
        let store = test_store().await;
        let email = format!("{}@example.com", Uuid::new_v4());
        let signup = WaitlistSignup::new(email.clone(), "A pet wellness tracker");

        let entry = store.insert_signup(&signup).await.unwrap();
        assert_eq!(entry.email, email);

        let err = store.insert_signup(&signup).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey));
    }

    #[tokio::test]
    #[ignore = "requires running PostgreSQL database"]
    async fn test_insert_event() {
        let store = test_store().await;
        let event = AnalyticsEvent {
            event_type: "random_idea_click".to_string(),
            device_type: "desktop".to_string(),
            browser: "chrome".to_string(),
            screen_width: Some(1440),
            screen_height: Some(900),
            referrer: None,
        };

        let record = store.insert_event(&event).await.unwrap();
        assert_eq!(record.screen_width, Some(1440));
        assert_eq!(record.event_type, "random_idea_click");
    }
}
