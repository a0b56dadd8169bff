//! Field validators.
//!
//! Each validator takes a candidate value and either hands it back unchanged
//! or rejects it. Only [`validate_name`] touches storage, and only to read.
//! Optional fields skip every check when the value is absent or empty.

use uuid::Uuid;

use crate::domain::Category;
use crate::error::{DomainError, Field, LengthBound, ValidationError};
use crate::ports::AuthorLookup;

/// Exact number of digits in a phone number.
pub const PHONE_NUMBER_DIGITS: usize = 10;

/// Minimum post content length, in characters.
pub const CONTENT_MIN_CHARS: usize = 250;

/// Maximum post summary length, in characters.
pub const SUMMARY_MAX_CHARS: usize = 250;

/// A post title must contain at least one of these.
pub const TITLE_HOOKS: &[&str] = &["Won't Believe", "Secret", "Top", "Guess"];

/// Author name: required, and not held by any author other than `current`.
///
/// `current` is the id of the author being renamed, or `None` for a new one.
pub async fn validate_name<L>(
    name: String,
    current: Option<Uuid>,
    lookup: &L,
) -> Result<String, DomainError>
where
    L: AuthorLookup + ?Sized,
{
    if name.is_empty() {
        return Err(ValidationError::Required { field: Field::Name }.into());
    }

    if let Some(existing) = lookup.find_by_name(&name).await? {
        if Some(existing.id()) != current {
            return Err(ValidationError::Unique { field: Field::Name }.into());
        }
    }

    Ok(name)
}

pub fn validate_phone_number(
    phone_number: Option<String>,
) -> Result<Option<String>, ValidationError> {
    if let Some(value) = phone_number.as_deref().filter(|v| !v.is_empty()) {
        let valid =
            value.len() == PHONE_NUMBER_DIGITS && value.bytes().all(|b| b.is_ascii_digit());
        if !valid {
            return Err(ValidationError::Format {
                field: Field::PhoneNumber,
                expected: "exactly 10 digits",
            });
        }
    }
    Ok(phone_number)
}

pub fn validate_title(title: String) -> Result<String, ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::Required {
            field: Field::Title,
        });
    }

    if !TITLE_HOOKS.iter().any(|hook| title.contains(hook)) {
        return Err(ValidationError::ContentPolicy {
            field: Field::Title,
            required_any: TITLE_HOOKS,
        });
    }

    Ok(title)
}

pub fn validate_content(content: Option<String>) -> Result<Option<String>, ValidationError> {
    if let Some(value) = content.as_deref().filter(|v| !v.is_empty()) {
        let actual = value.chars().count();
        if actual < CONTENT_MIN_CHARS {
            return Err(ValidationError::Length {
                field: Field::Content,
                bound: LengthBound::Min(CONTENT_MIN_CHARS),
                actual,
            });
        }
    }
    Ok(content)
}

/// Category must be exactly `Fiction` or `Non-Fiction`.
///
/// An empty string is treated as absent and yields `None`.
pub fn validate_category(category: Option<String>) -> Result<Option<Category>, ValidationError> {
    match category.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => Category::parse(value)
            .map(Some)
            .ok_or(ValidationError::Enum {
                field: Field::Category,
                allowed: Category::ALLOWED,
            }),
    }
}

pub fn validate_summary(summary: Option<String>) -> Result<Option<String>, ValidationError> {
    if let Some(value) = summary.as_deref() {
        let actual = value.chars().count();
        if actual > SUMMARY_MAX_CHARS {
            return Err(ValidationError::Length {
                field: Field::Summary,
                bound: LengthBound::Max(SUMMARY_MAX_CHARS),
                actual,
            });
        }
    }
    Ok(summary)
}
