//! What the generic repositories need to know about a stored record.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use scribe_core::domain::{Author, Post};

/// A record with a storage identity and storage-managed timestamps.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in logs and errors.
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    fn created_at(&self) -> DateTime<Utc>;

    /// Replace the timestamps with the ones chosen by storage.
    fn persisted(self, created_at: DateTime<Utc>, updated_at: Option<DateTime<Utc>>) -> Self;

    /// Value that no two stored records may share, if any.
    fn unique_value(&self) -> Option<&str> {
        None
    }
}

impl Record for Author {
    const KIND: &'static str = "author";

    fn id(&self) -> Uuid {
        Author::id(self)
    }

    fn created_at(&self) -> DateTime<Utc> {
        Author::created_at(self)
    }

    fn persisted(self, created_at: DateTime<Utc>, updated_at: Option<DateTime<Utc>>) -> Self {
        Author::persisted(self, created_at, updated_at)
    }

    fn unique_value(&self) -> Option<&str> {
        Some(self.name())
    }
}

impl Record for Post {
    const KIND: &'static str = "post";

    fn id(&self) -> Uuid {
        Post::id(self)
    }

    fn created_at(&self) -> DateTime<Utc> {
        Post::created_at(self)
    }

    fn persisted(self, created_at: DateTime<Utc>, updated_at: Option<DateTime<Utc>>) -> Self {
        Post::persisted(self, created_at, updated_at)
    }
}
