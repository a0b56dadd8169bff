//! Storage handle - validates records and persists them.

use std::sync::Arc;

use uuid::Uuid;

use scribe_core::domain::{Author, Category, NewPost, Post, PostChanges};
use scribe_core::error::{DomainError, Field, RepoError, ValidationError};
use scribe_core::ports::{AuthorRepository, PostRepository};

use crate::config::StoreConfig;
use crate::memory::{InMemoryAuthorRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use crate::database::{self, PostgresAuthorRepository, PostgresPostRepository};

/// Author and post repositories, passed explicitly to whoever needs them.
///
/// Every write runs the field validators before reaching storage.
#[derive(Clone)]
pub struct Store {
    authors: Arc<dyn AuthorRepository>,
    posts: Arc<dyn PostRepository>,
}

impl Store {
    pub fn new(authors: Arc<dyn AuthorRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { authors, posts }
    }

    /// A store backed by process memory.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryAuthorRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
        )
    }

    /// Build the store selected by `config`.
    pub async fn connect(config: &StoreConfig) -> Result<Self, RepoError> {
        match &config.database {
            #[cfg(feature = "postgres")]
            Some(db_config) => {
                let conn = Arc::new(database::connect(db_config).await?);
                tracing::info!("Using PostgreSQL store");
                Ok(Self::new(
                    Arc::new(PostgresAuthorRepository::shared(Arc::clone(&conn))),
                    Arc::new(PostgresPostRepository::shared(conn)),
                ))
            }
            #[cfg(not(feature = "postgres"))]
            Some(_) => {
                tracing::warn!("DATABASE_URL is set but the postgres feature is disabled");
                Ok(Self::in_memory())
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running with the in-memory store.");
                Ok(Self::in_memory())
            }
        }
    }

    pub fn authors(&self) -> &Arc<dyn AuthorRepository> {
        &self.authors
    }

    pub fn posts(&self) -> &Arc<dyn PostRepository> {
        &self.posts
    }

    // Authors

    pub async fn create_author(
        &self,
        name: String,
        phone_number: Option<String>,
    ) -> Result<Author, DomainError> {
        let author = Author::new(name, phone_number, self.authors.as_ref())
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected new author"))?;

        let saved = self.save_author(author).await?;
        tracing::info!(author_id = %saved.id(), "Author created");
        Ok(saved)
    }

    pub async fn rename_author(&self, id: Uuid, name: String) -> Result<Author, DomainError> {
        let mut author = self.author(id).await?;
        author
            .set_name(name, self.authors.as_ref())
            .await
            .inspect_err(|e| tracing::warn!(author_id = %id, error = %e, "Rejected rename"))?;

        let saved = self.save_author(author).await?;
        tracing::info!(author_id = %id, "Author renamed");
        Ok(saved)
    }

    pub async fn set_author_phone(
        &self,
        id: Uuid,
        phone_number: Option<String>,
    ) -> Result<Author, DomainError> {
        let mut author = self.author(id).await?;
        author.set_phone_number(phone_number)?;

        let saved = self.save_author(author).await?;
        tracing::info!(author_id = %id, "Author phone number updated");
        Ok(saved)
    }

    pub async fn author(&self, id: Uuid) -> Result<Author, DomainError> {
        self.authors
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "author",
                id,
            })
    }

    pub async fn list_authors(&self) -> Result<Vec<Author>, DomainError> {
        Ok(self.authors.list().await?)
    }

    pub async fn delete_author(&self, id: Uuid) -> Result<(), DomainError> {
        self.authors.delete(id).await.map_err(|e| not_found(e, "author", id))?;
        tracing::info!(author_id = %id, "Author deleted");
        Ok(())
    }

    /// A constraint violation here means another writer took the name
    /// between validation and save.
    async fn save_author(&self, author: Author) -> Result<Author, DomainError> {
        self.authors.save(author).await.map_err(|e| -> DomainError {
            match e {
                RepoError::Constraint(detail) => {
                    tracing::warn!(%detail, "Author name taken at write time");
                    ValidationError::Unique { field: Field::Name }.into()
                }
                other => other.into(),
            }
        })
    }

    // Posts

    pub async fn create_post(&self, fields: NewPost) -> Result<Post, DomainError> {
        let post =
            Post::new(fields).inspect_err(|e| tracing::warn!(error = %e, "Rejected new post"))?;

        let saved = self.posts.save(post).await?;
        tracing::info!(post_id = %saved.id(), "Post created");
        Ok(saved)
    }

    /// Apply `changes` to a stored post. Nothing is written if any field is
    /// rejected.
    pub async fn update_post(&self, id: Uuid, changes: PostChanges) -> Result<Post, DomainError> {
        let mut post = self.post(id).await?;
        if changes.is_empty() {
            return Ok(post);
        }

        post.apply(changes)
            .inspect_err(|e| tracing::warn!(post_id = %id, error = %e, "Rejected post update"))?;

        let saved = self.posts.save(post).await?;
        tracing::info!(post_id = %id, "Post updated");
        Ok(saved)
    }

    pub async fn post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "post",
                id,
            })
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.list().await?)
    }

    pub async fn posts_in_category(&self, category: Category) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_by_category(category).await?)
    }

    pub async fn delete_post(&self, id: Uuid) -> Result<(), DomainError> {
        self.posts.delete(id).await.map_err(|e| not_found(e, "post", id))?;
        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }
}

fn not_found(err: RepoError, entity_type: &'static str, id: Uuid) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::NotFound { entity_type, id },
        other => other.into(),
    }
}
