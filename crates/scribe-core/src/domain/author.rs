use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{DomainError, ValidationError};
use crate::ports::AuthorLookup;
use crate::validation::{validate_name, validate_phone_number};

/// Author entity - a person who writes posts.
///
/// Fields are only reachable through validating setters, so an `Author`
/// never holds a name or phone number that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: Uuid,
    name: String,
    phone_number: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Author {
    /// Create a new author with generated ID and creation timestamp.
    ///
    /// The name is checked against the authors visible through `lookup`.
    pub async fn new<L>(
        name: String,
        phone_number: Option<String>,
        lookup: &L,
    ) -> Result<Self, DomainError>
    where
        L: AuthorLookup + ?Sized,
    {
        let name = validate_name(name, None, lookup).await?;
        let phone_number = validate_phone_number(phone_number)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            phone_number,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    /// Rebuild an author from stored values without validating them.
    pub fn restore(
        id: Uuid,
        name: String,
        phone_number: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            phone_number,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Rename the author. On failure the current name is kept.
    pub async fn set_name<L>(&mut self, name: String, lookup: &L) -> Result<(), DomainError>
    where
        L: AuthorLookup + ?Sized,
    {
        self.name = validate_name(name, Some(self.id), lookup).await?;
        Ok(())
    }

    pub fn set_phone_number(
        &mut self,
        phone_number: Option<String>,
    ) -> Result<(), ValidationError> {
        self.phone_number = validate_phone_number(phone_number)?;
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
    use crate::error::{Field, RepoError};
    use async_trait::async_trait;

    struct Taken(&'static str);

    #[async_trait]
    impl AuthorLookup for Taken {
        async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
            Ok((name == self.0).then(|| {
                Author::restore(Uuid::new_v4(), name.to_string(), None, Utc::now(), None)
            }))
        }
    }

    #[tokio::test]
    async fn test_new_author() {
        let author = Author::new("Ada".to_string(), Some("5551234567".to_string()), &Taken("Bob"))
            .await
            .unwrap();

        assert_eq!(author.name(), "Ada");
        assert_eq!(author.phone_number(), Some("5551234567"));
        assert!(author.updated_at().is_none());
    }

    #[tokio::test]
    async fn test_new_author_rejects_bad_phone() {
        let err = Author::new("Ada".to_string(), Some("555-1234".to_string()), &Taken("Bob"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::Format {
                field: Field::PhoneNumber,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_rejected_rename_keeps_name() {
        let mut author = Author::new("Ada".to_string(), None, &Taken("Bob"))
            .await
            .unwrap();

        assert!(author.set_name("Bob".to_string(), &Taken("Bob")).await.is_err());
        assert!(author.set_name(String::new(), &Taken("Bob")).await.is_err());
        assert_eq!(author.name(), "Ada");

        author.set_name("Grace".to_string(), &Taken("Bob")).await.unwrap();
        assert_eq!(author.name(), "Grace");
    }

    #[test]
    fn test_set_phone_number() {
        let mut author = Author::restore(Uuid::new_v4(), "Ada".to_string(), None, Utc::now(), None);

        author.set_phone_number(Some("0123456789".to_string())).unwrap();
        assert!(author.set_phone_number(Some("12345".to_string())).is_err());
        assert_eq!(author.phone_number(), Some("0123456789"));

        author.set_phone_number(None).unwrap();
        assert_eq!(author.phone_number(), None);
    }
}
