//! Rows of the waitlist and analytics tables

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::{AnalyticsEvent, WaitlistSignup};

/// Stored waitlist signup
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub idea: String,
    pub created_at: DateTime<Utc>,
}

impl WaitlistEntry {
    pub fn from_signup(signup: &WaitlistSignup) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: signup.email.clone(),
            idea: signup.idea.clone(),
            created_at: Utc::now(),
        }
    }
}

/// Stored analytics event
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AnalyticsRecord {
    pub id: Uuid,
    pub event_type: String,
    pub device_type: String,
    pub browser: String,
    pub screen_width: Option<i32>,
    pub screen_height: Option<i32>,
    pub referrer: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AnalyticsRecord {
    pub fn from_event(event: &AnalyticsEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type: event.event_type.clone(),
            device_type: event.device_type.clone(),
            browser: event.browser.clone(),
            // Postgres INTEGER is signed; clamp absurd viewport sizes
            screen_width: event.screen_width.map(|w| i32::try_from(w).unwrap_or(i32::MAX)),
            screen_height: event.screen_height.map(|h| i32::try_from(h).unwrap_or(i32::MAX)),
            referrer: event.referrer.clone(),
            created_at: Utc::now(),
        }
    }
}
