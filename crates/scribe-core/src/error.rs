//! Domain-level error types.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// A validated record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    PhoneNumber,
    Title,
    Content,
    Category,
    Summary,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::PhoneNumber => "phone_number",
            Field::Title => "title",
            Field::Content => "content",
            Field::Category => "category",
            Field::Summary => "summary",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a length rule was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBound {
    Min(usize),
    Max(usize),
}

impl fmt::Display for LengthBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthBound::Min(n) => write!(f, "at least {} characters long", n),
            LengthBound::Max(n) => write!(f, "a maximum of {} characters", n),
        }
    }
}

/// Field validation failures, raised when a value is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} field is required")]
    Required { field: Field },

    #[error("{field} must be unique")]
    Unique { field: Field },

    #[error("{field} must be {expected}")]
    Format {
        field: Field,
        expected: &'static str,
    },

    #[error("{field} must contain one of the following: {}", quoted(.required_any))]
    ContentPolicy {
        field: Field,
        required_any: &'static [&'static str],
    },

    #[error("{field} must be {bound} (got {actual})")]
    Length {
        field: Field,
        bound: LengthBound,
        actual: usize,
    },

    #[error("{field} must be either {}", either(.allowed))]
    Enum {
        field: Field,
        allowed: &'static [&'static str],
    },
}

impl ValidationError {
    /// The field whose candidate value was rejected.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required { field }
            | ValidationError::Unique { field }
            | ValidationError::Format { field, .. }
            | ValidationError::ContentPolicy { field, .. }
            | ValidationError::Length { field, .. }
            | ValidationError::Enum { field, .. } => *field,
        }
    }
}

fn quoted(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("\"{}\"", v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `"a", "b" or "c"`
fn either(values: &[&str]) -> String {
    match values.split_last() {
        Some((last, [])) => format!("\"{}\"", last),
        Some((last, rest)) => format!("{} or \"{}\"", quoted(rest), last),
        None => String::new(),
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = ValidationError::Required { field: Field::Name };
        assert_eq!(err.to_string(), "name field is required");

        let err = ValidationError::Enum {
            field: Field::Category,
            allowed: &["Fiction", "Non-Fiction"],
        };
        assert_eq!(
            err.to_string(),
            "category must be either \"Fiction\" or \"Non-Fiction\""
        );
    }

    #[test]
    fn test_either_joins_last_value_with_or() {
        assert_eq!(either(&["A"]), "\"A\"");
        assert_eq!(either(&["A", "B", "C"]), "\"A\", \"B\" or \"C\"");
    }

    #[test]
    fn test_length_message_reports_bound() {
        let err = ValidationError::Length {
            field: Field::Summary,
            bound: LengthBound::Max(250),
            actual: 251,
        };
        assert_eq!(
            err.to_string(),
            "summary must be a maximum of 250 characters (got 251)"
        );
        assert_eq!(err.field(), Field::Summary);
    }
}
