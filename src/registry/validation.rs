//! Product name validation.
//!
//! The registry delegates every name check to a [`Validator`], so callers
//! (and tests) can substitute their own rules.

use thiserror::Error;

/// Default minimum product name length, in characters.
pub const DEFAULT_MIN_NAME_LEN: usize = 4;

/// A rejected product name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name was missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// The name was shorter than the configured minimum.
    #[error("{field} must be at least {min} characters, got {actual}")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    /// Rejected by a custom validator.
    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Capability used by the registry to accept or reject product names.
pub trait Validator: Send + Sync + std::fmt::Debug {
    fn validate(&self, name: &str) -> Result<(), ValidationError>;
}

/// Requires a non-empty name of at least `min_len` characters.
#[derive(Debug, Clone, Copy)]
pub struct MinLengthValidator {
    min_len: usize,
}

impl MinLengthValidator {
    pub const FIELD: &'static str = "product_name";

    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }
}

impl Default for MinLengthValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_NAME_LEN)
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::Required { field: Self::FIELD });
        }
        let actual = name.chars().count();
        if actual < self.min_len {
            return Err(ValidationError::TooShort {
                field: Self::FIELD,
                min: self.min_len,
                actual,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_validator() {
        let v = MinLengthValidator::default();
        assert!(v.validate("abcd").is_ok());
        assert!(v.validate("phone").is_ok());
        assert_eq!(
            v.validate(""),
            Err(ValidationError::Required { field: "product_name" })
        );
        assert_eq!(
            v.validate("abc"),
            Err(ValidationError::TooShort {
                field: "product_name",
                min: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // 4 characters, 8 bytes
        let v = MinLengthValidator::new(4);
        assert!(v.validate("ääää").is_ok());
        assert!(v.validate("äää").is_err());
    }
}
