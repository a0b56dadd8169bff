//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`, plus the
//! [`Store`] handle that validates records before persisting them.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod config;
pub mod database;
pub mod memory;
mod record;
pub mod store;
pub mod telemetry;

pub use config::StoreConfig;
pub use database::DatabaseConfig;
pub use memory::{InMemoryAuthorRepository, InMemoryPostRepository};
pub use record::Record;
pub use store::Store;
pub use telemetry::{TelemetryConfig, init_telemetry};

#[cfg(feature = "postgres")]
pub use database::{PostgresAuthorRepository, PostgresPostRepository};
