//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use scribe_core::domain::{Category, Post};
use scribe_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
///
/// Fails if the stored category is not one the domain knows.
impl TryFrom<Model> for Post {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let category = match model.category.as_deref() {
            None | Some("") => None,
            Some(value) => Some(Category::parse(value).ok_or_else(|| {
                RepoError::Query(format!(
                    "post {} has unknown category \"{}\"",
                    model.id, value
                ))
            })?),
        };

        Ok(Post::restore(
            model.id,
            model.title,
            model.content,
            category,
            model.summary,
            model.created_at.into(),
            model.updated_at.map(Into::into),
        ))
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Set(post.id()),
            title: Set(post.title().to_string()),
            content: Set(post.content().map(str::to_string)),
            category: Set(post.category().map(|c| c.as_str().to_string())),
            summary: Set(post.summary().map(str::to_string)),
            created_at: Set(post.created_at().into()),
            updated_at: Set(post.updated_at().map(Into::into)),
        }
    }
}
