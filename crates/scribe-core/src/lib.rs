//! # Scribe Core
//!
//! The domain layer of the Scribe blog backend: author and post records,
//! the field validators that guard them, and the repository ports that
//! storage must implement. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::{DomainError, Field, LengthBound, RepoError, ValidationError};
