//! In-memory record store, used when no database is configured and in tests

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use super::models::{AnalyticsRecord, WaitlistEntry};
use super::store::{RecordStore, StoreError};
use crate::core::{AnalyticsEvent, WaitlistSignup};

#[derive(Default)]
pub struct MemoryRecordStore {
    /// Signups keyed by email
    signups: DashMap<String, WaitlistEntry>,
    events: DashMap<Uuid, AnalyticsRecord>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signup_count(&self) -> usize {
        self.signups.len()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn signup(&self, email: &str) -> Option<WaitlistEntry> {
        self.signups.get(email).map(|entry| entry.clone())
    }

    /// Stored events of the given type
    pub fn events_of_type(&self, event_type: &str) -> Vec<AnalyticsRecord> {
        self.events
            .iter()
            .filter(|record| record.event_type == event_type)
            .map(|record| record.clone())
            .collect()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn insert_signup(&self, signup: &WaitlistSignup) -> Result<WaitlistEntry, StoreError> {
        match self.signups.entry(signup.email.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey),
            Entry::Vacant(slot) => {
                let entry = WaitlistEntry::from_signup(signup);
                slot.insert(entry.clone());
                Ok(entry)
            }
        }
    }

    async fn insert_event(&self, event: &AnalyticsEvent) -> Result<AnalyticsRecord, StoreError> {
        let record = AnalyticsRecord::from_event(event);
        self.events.insert(record.id, record.clone());
        Ok(record)
    }
}
