use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::validation::{validate_category, validate_content, validate_summary, validate_title};

/// Post category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    /// Accepted spellings, in declaration order.
    pub const ALLOWED: &'static [&'static str] = &["Fiction", "Non-Fiction"];

    /// Exact, case-sensitive match against [`Category::ALLOWED`].
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Fiction" => Some(Category::Fiction),
            "Non-Fiction" => Some(Category::NonFiction),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values for a post that does not exist yet.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content: Option<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
}

/// A partial update. `None` leaves a field alone; `Some(None)` clears an
/// optional field.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub summary: Option<Option<String>>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.summary.is_none()
    }
}

/// Post entity - represents a blog post or article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    id: Uuid,
    title: String,
    content: Option<String>,
    category: Option<Category>,
    summary: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new post. Fails on the first field that does not validate.
    pub fn new(fields: NewPost) -> Result<Self, ValidationError> {
        Ok(Self {
            id: Uuid::new_v4(),
            title: validate_title(fields.title)?,
            content: validate_content(fields.content)?,
            category: validate_category(fields.category)?,
            summary: validate_summary(fields.summary)?,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    /// Rebuild a post from stored values without validating them.
    pub fn restore(
        id: Uuid,
        title: String,
        content: Option<String>,
        category: Option<Category>,
        summary: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            category,
            summary,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn set_title(&mut self, title: String) -> Result<(), ValidationError> {
        self.title = validate_title(title)?;
        Ok(())
    }

    pub fn set_content(&mut self, content: Option<String>) -> Result<(), ValidationError> {
        self.content = validate_content(content)?;
        Ok(())
    }

    pub fn set_category(&mut self, category: Option<String>) -> Result<(), ValidationError> {
        self.category = validate_category(category)?;
        Ok(())
    }

    pub fn set_summary(&mut self, summary: Option<String>) -> Result<(), ValidationError> {
        self.summary = validate_summary(summary)?;
        Ok(())
    }

    /// Validate every supplied field, then assign them together.
    ///
    /// If any field is rejected the post is left untouched.
    pub fn apply(&mut self, changes: PostChanges) -> Result<(), ValidationError> {
        let title = changes.title.map(validate_title).transpose()?;
        let content = changes.content.map(validate_content).transpose()?;
        let category = changes.category.map(validate_category).transpose()?;
        let summary = changes.summary.map(validate_summary).transpose()?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(summary) = summary {
            self.summary = summary;
        }
        Ok(())
    }

    /// Apply the timestamps assigned by storage.
    pub fn persisted(
        mut self,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Field, LengthBound};

    fn valid_fields() -> NewPost {
        NewPost {
            title: "Top 10 Secrets".to_string(),
            content: Some("x".repeat(300)),
            category: Some("Non-Fiction".to_string()),
            summary: Some("Short and sweet.".to_string()),
        }
    }

    #[test]
    fn test_new_post() {
        let post = Post::new(valid_fields()).unwrap();
        assert_eq!(post.title(), "Top 10 Secrets");
        assert_eq!(post.category(), Some(Category::NonFiction));
        assert!(post.updated_at().is_none());
    }

    #[test]
    fn test_new_post_with_only_title() {
        let post = Post::new(NewPost {
            title: "Guess What".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(post.content(), None);
        assert_eq!(post.category(), None);
        assert_eq!(post.summary(), None);
    }

    #[test]
    fn test_new_post_rejects_first_bad_field() {
        let err = Post::new(NewPost {
            content: Some("too short".to_string()),
            ..valid_fields()
        })
        .unwrap_err();
        assert_eq!(err.field(), Field::Content);

        let err = Post::new(NewPost {
            title: "My Boring Day".to_string(),
            ..valid_fields()
        })
        .unwrap_err();
        assert_eq!(err.field(), Field::Title);
    }

    #[test]
    fn test_setters_keep_value_on_rejection() {
        let mut post = Post::new(valid_fields()).unwrap();

        assert!(post.set_category(Some("SciFi".to_string())).is_err());
        assert_eq!(post.category(), Some(Category::NonFiction));

        assert!(post.set_summary(Some("s".repeat(251))).is_err());
        assert_eq!(post.summary(), Some("Short and sweet."));

        post.set_category(None).unwrap();
        assert_eq!(post.category(), None);
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut post = Post::new(valid_fields()).unwrap();
        let before = post.clone();

        let err = post
            .apply(PostChanges {
                title: Some("The Secret Garden".to_string()),
                summary: Some(Some("s".repeat(251))),
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(
            err,
            ValidationError::Length {
                field: Field::Summary,
                bound: LengthBound::Max(250),
                actual: 251,
            }
        );
        assert_eq!(post, before);
    }

    #[test]
    fn test_apply_assigns_and_clears() {
        let mut post = Post::new(valid_fields()).unwrap();

        post.apply(PostChanges {
            title: Some("The Secret Garden".to_string()),
            category: Some(Some("Fiction".to_string())),
            summary: Some(None),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(post.title(), "The Secret Garden");
        assert_eq!(post.category(), Some(Category::Fiction));
        assert_eq!(post.summary(), None);
        assert_eq!(post.content(), Some("x".repeat(300).as_str()));
    }

    #[test]
    fn test_category_serializes_with_hyphen() {
        assert_eq!(
            serde_json::to_string(&Category::NonFiction).unwrap(),
            "\"Non-Fiction\""
        );
        assert_eq!(Category::parse("Fiction"), Some(Category::Fiction));
        assert_eq!(Category::parse("Non Fiction"), None);
    }
}
