use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, SqlErr,
};
use uuid::Uuid;

use scribe_core::error::RepoError;
use scribe_core::ports::BaseRepository;

use crate::record::Record;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self::shared(Arc::new(db))
    }

    /// Build a repository on a connection pool other repositories also use.
    pub fn shared(db: Arc<DbConn>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// Map a failed write, surfacing unique violations as constraint errors.
pub(crate) fn write_error(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepoError::Constraint(detail),
        _ => RepoError::Query(err.to_string()),
    }
}

pub(crate) fn query_error(err: DbErr) -> RepoError {
    RepoError::Query(err.to_string())
}

#[async_trait]
impl<E, T> BaseRepository<T, Uuid> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    T: Record + TryFrom<E::Model, Error = RepoError> + Into<E::ActiveModel>,
{
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(query_error)?;

        result.map(T::try_from).transpose()
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let existing = E::find_by_id(entity.id())
            .one(&*self.db)
            .await
            .map_err(query_error)?;

        let model = match existing {
            Some(model) => {
                let stored = T::try_from(model)?;
                let entity = entity.persisted(stored.created_at(), Some(Utc::now()));
                let active_model: E::ActiveModel = entity.into();
                active_model.update(&*self.db).await.map_err(write_error)?
            }
            None => {
                let active_model: E::ActiveModel = entity.into();
                active_model.insert(&*self.db).await.map_err(write_error)?
            }
        };

        tracing::debug!(kind = T::KIND, "Saved record");
        T::try_from(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> Result<Vec<T>, RepoError> {
        let models = E::find().all(&*self.db).await.map_err(query_error)?;

        let mut all = models
            .into_iter()
            .map(T::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        all.sort_by_key(|e| e.created_at());
        Ok(all)
    }
}
