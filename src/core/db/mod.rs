//! Database module for valid8
//!
//! This module provides the record store behind the waitlist API: a
//! PostgreSQL backend using SQLx and an in-memory fallback.

pub mod memory;
pub mod models;
pub mod pool;
pub mod postgres;
pub mod store;

// Re-export commonly used items
pub use memory::MemoryRecordStore;
pub use models::*;
pub use pool::{DbConfig, DbError, create_pool, create_pool_with_migrations, health_check};
pub use postgres::PgRecordStore;
pub use store::{RecordStore, StoreError};

// Re-export sqlx types that might be needed
pub use sqlx::PgPool;
