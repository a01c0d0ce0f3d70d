//! Validation errors.

use std::fmt;

/// Why a single environment variable was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// Missing, or present but blank.
    NotDefined,
    NotANumber,
    NotABoolean,
    /// Not a member of the allowed set. Values are kept in declaration order,
    /// duplicates included.
    NotOneOf(Vec<String>),
    /// Free-form reason produced by a custom validator.
    Custom(String),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDefined => write!(f, "is not defined"),
            Self::NotANumber => write!(f, "must be a number"),
            Self::NotABoolean => write!(f, "must be a boolean (true/false)"),
            Self::NotOneOf(values) => write!(f, "must be one of {}", values.join("/")),
            Self::Custom(reason) => f.write_str(reason),
        }
    }
}

/// An environment variable failed to load.
///
/// Displays as `Env var <key> <reason>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Env var {key} {reason}")]
pub struct ValidationError {
    pub key: String,
    pub reason: Reason,
}

impl ValidationError {
    #[must_use]
    pub fn new(key: impl Into<String>, reason: Reason) -> Self {
        Self {
            key: key.into(),
            reason,
        }
    }

    /// Build an error carrying a caller-supplied reason, for use inside
    /// [`from_fn`](crate::from_fn) validators.
    #[must_use]
    pub fn custom(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(key, Reason::Custom(reason.into()))
    }

    #[must_use]
    pub fn not_defined(key: impl Into<String>) -> Self {
        Self::new(key, Reason::NotDefined)
    }
}

pub type Error = ValidationError;
pub type Result<T> = std::result::Result<T, Error>;
