//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use scribe_core::domain::{Author, Category, Post};
use scribe_core::error::RepoError;
use scribe_core::ports::{AuthorLookup, AuthorRepository, PostRepository};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, query_error};

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl AuthorLookup for PostgresAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        tracing::debug!(author_name = %name, "Finding author by name");

        let result = AuthorEntity::find()
            .filter(author::Column::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(query_error)?;

        result.map(Author::try_from).transpose()
    }
}

impl AuthorRepository for PostgresAuthorRepository {}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Category.eq(category.as_str()))
            .order_by_asc(post::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(query_error)?;

        result.into_iter().map(Post::try_from).collect()
    }
}
