use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Author, Category, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    ///
    /// Implementations keep the stored `created_at` of an existing entity and
    /// stamp its `updated_at`; a new entity is stored as given.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;

    /// All stored entities, oldest first.
    async fn list(&self) -> Result<Vec<T>, RepoError>;
}

/// Name lookup used by author name validation.
#[async_trait]
pub trait AuthorLookup: Send + Sync {
    /// Find the author whose name is exactly `name`.
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError>;
}

/// Author repository.
///
/// `save` must reject a name already held by a different author with
/// [`RepoError::Constraint`], even if the caller validated it beforehand.
pub trait AuthorRepository: BaseRepository<Author, Uuid> + AuthorLookup {}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError>;
}
