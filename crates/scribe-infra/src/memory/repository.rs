//! In-memory repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use scribe_core::domain::{Author, Category, Post};
use scribe_core::error::RepoError;
use scribe_core::ports::{AuthorLookup, AuthorRepository, BaseRepository, PostRepository};

use crate::record::Record;

/// In-memory store using a HashMap with async RwLock.
///
/// Uniqueness is checked under the write lock, so two concurrent saves of
/// the same unique value cannot both succeed.
/// Note: Data is lost on process restart.
pub struct InMemoryRepository<T> {
    store: RwLock<HashMap<Uuid, T>>,
}

/// In-memory author repository.
pub type InMemoryAuthorRepository = InMemoryRepository<Author>;

/// In-memory post repository.
pub type InMemoryPostRepository = InMemoryRepository<Post>;

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> BaseRepository<T, Uuid> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;
        let id = entity.id();

        if let Some(value) = entity.unique_value() {
            let taken = store
                .values()
                .any(|other| other.id() != id && other.unique_value() == Some(value));
            if taken {
                return Err(RepoError::Constraint(format!(
                    "{} \"{}\" already exists",
                    T::KIND,
                    value
                )));
            }
        }

        let entity = match store.get(&id) {
            Some(existing) => entity.persisted(existing.created_at(), Some(Utc::now())),
            None => entity,
        };

        store.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }

    async fn list(&self) -> Result<Vec<T>, RepoError> {
        let store = self.store.read().await;
        let mut all: Vec<T> = store.values().cloned().collect();
        all.sort_by_key(|e| e.created_at());
        Ok(all)
    }
}

#[async_trait]
impl AuthorLookup for InMemoryAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|a| a.name() == name).cloned())
    }
}

impl AuthorRepository for InMemoryAuthorRepository {}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.list().await?;
        posts.retain(|p| p.category() == Some(category));
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use scribe_core::domain::NewPost;

    fn author(name: &str) -> Author {
        Author::restore(Uuid::new_v4(), name.to_string(), None, Utc::now(), None)
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryAuthorRepository::new();
        let saved = repo.save(author("Ada")).await.unwrap();

        assert_eq!(repo.find_by_id(saved.id()).await.unwrap(), Some(saved.clone()));
        assert_eq!(repo.find_by_name("Ada").await.unwrap(), Some(saved));
        assert_eq!(repo.find_by_name("ada").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_a_constraint_violation() {
        let repo = InMemoryAuthorRepository::new();
        repo.save(author("Ada")).await.unwrap();

        let err = repo.save(author("Ada")).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_resave_stamps_updated_at_and_keeps_created_at() {
        let repo = InMemoryAuthorRepository::new();
        let first = repo.save(author("Ada")).await.unwrap();
        assert!(first.updated_at().is_none());

        // A later construction time must not overwrite the stored one.
        let later = first
            .clone()
            .persisted(first.created_at() + Duration::hours(1), None);
        let second = repo.save(later).await.unwrap();

        assert_eq!(second.created_at(), first.created_at());
        assert!(second.updated_at().is_some());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryPostRepository::new();
        let post = Post::new(NewPost {
            title: "Top Picks".to_string(),
            ..Default::default()
        })
        .unwrap();
        let id = post.id();

        repo.save(post).await.unwrap();
        repo.delete(id).await.unwrap();
        assert_eq!(repo.find_by_id(id).await.unwrap(), None);
        assert!(matches!(repo.delete(id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_by_category() {
        let repo = InMemoryPostRepository::new();
        for category in [Some("Fiction"), Some("Non-Fiction"), None] {
            let post = Post::new(NewPost {
                title: "Guess Again".to_string(),
                category: category.map(str::to_string),
                ..Default::default()
            })
            .unwrap();
            repo.save(post).await.unwrap();
        }

        let fiction = repo.find_by_category(Category::Fiction).await.unwrap();
        assert_eq!(fiction.len(), 1);
        assert_eq!(fiction[0].category(), Some(Category::Fiction));
    }
}
