//! Validators accepted by the prompts, plus a few stock ones.
//!
//! Item validators look at item keys only; payloads stay opaque.

use std::{
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

/// Result of input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Input is valid
    Valid,
    /// Input is invalid with an error message
    Invalid(String),
}

impl ValidationResult {
    /// Returns true if the validation passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Converts into a `Result`, keeping the message on failure.
    pub fn into_result(self) -> Result<(), String> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(msg) => Err(msg),
        }
    }
}

macro_rules! validator {
    ($(#[$meta:meta])* $name:ident, $arg:ty) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name(Arc<dyn Fn($arg) -> ValidationResult + Send + Sync>);

        impl $name {
            pub fn new<F>(f: F) -> Self
            where
                F: Fn($arg) -> ValidationResult + Send + Sync + 'static,
            {
                Self(Arc::new(f))
            }
        }

        impl<F> From<F> for $name
        where
            F: Fn($arg) -> ValidationResult + Send + Sync + 'static,
        {
            fn from(f: F) -> Self {
                Self::new(f)
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), "(..)"))
            }
        }
    };
}

validator!(
    /// Validates a line of free text.
    StringValidator,
    &str
);
validator!(
    /// Validates a single item by its key.
    ItemValidator,
    &str
);
validator!(
    /// Validates a set of chosen items by their keys.
    ItemListValidator,
    &[&str]
);

impl StringValidator {
    #[must_use]
    pub fn validate(&self, input: &str) -> ValidationResult {
        (self.0)(input)
    }
}

impl ItemValidator {
    #[must_use]
    pub fn validate(&self, key: &str) -> ValidationResult {
        (self.0)(key)
    }
}

impl ItemListValidator {
    #[must_use]
    pub fn validate(&self, keys: &[&str]) -> ValidationResult {
        (self.0)(keys)
    }
}

/// Accepts any text.
pub fn accept_any(_: &str) -> ValidationResult {
    ValidationResult::Valid
}

/// Accepts any selection.
pub fn accept_any_list(_: &[&str]) -> ValidationResult {
    ValidationResult::Valid
}

pub fn not_empty(input: &str) -> ValidationResult {
    if input.trim().is_empty() {
        ValidationResult::Invalid("input cannot be empty".into())
    } else {
        ValidationResult::Valid
    }
}

pub fn integer(input: &str) -> ValidationResult {
    match input.trim().parse::<i64>() {
        Ok(_) => ValidationResult::Valid,
        Err(_) => ValidationResult::Invalid("input must be integer".into()),
    }
}

pub fn float(input: &str) -> ValidationResult {
    match input.trim().parse::<f64>() {
        Ok(_) => ValidationResult::Valid,
        Err(_) => ValidationResult::Invalid("input must be float".into()),
    }
}

/// Default item validator: the key must not be empty.
pub fn non_empty_key(key: &str) -> ValidationResult {
    if key.is_empty() {
        ValidationResult::Invalid("item has no key".into())
    } else {
        ValidationResult::Valid
    }
}

/// Rejects keys containing ASCII digits.
pub fn no_numbers(key: &str) -> ValidationResult {
    if key.chars().any(|c| c.is_ascii_digit()) {
        ValidationResult::Invalid("no numbers allowed".into())
    } else {
        ValidationResult::Valid
    }
}

pub fn at_least_one(keys: &[&str]) -> ValidationResult {
    if keys.is_empty() {
        ValidationResult::Invalid("select at least one item".into())
    } else {
        ValidationResult::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer() {
        assert!(integer("42").is_valid());
        assert!(integer(" -7 ").is_valid());
        assert_eq!(
            integer("4.2"),
            ValidationResult::Invalid("input must be integer".into())
        );
    }

    #[test]
    fn test_float() {
        assert!(float("4.2").is_valid());
        assert!(float("1e3").is_valid());
        assert!(!float("abc").is_valid());
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty("x").is_valid());
        assert!(!not_empty("   ").is_valid());
    }

    #[test]
    fn test_non_empty_key() {
        assert!(non_empty_key("apple").is_valid());
        assert_eq!(
            non_empty_key(""),
            ValidationResult::Invalid("item has no key".into())
        );
    }

    #[test]
    fn test_no_numbers() {
        assert!(no_numbers("apple").is_valid());
        assert!(!no_numbers("object 1").is_valid());
    }

    #[test]
    fn test_at_least_one() {
        assert!(at_least_one(&["a"]).is_valid());
        assert!(!at_least_one(&[]).is_valid());
    }

    #[test]
    fn test_closures_convert_into_validators() {
        let v: StringValidator = (|s: &str| {
            if s.len() > 3 {
                ValidationResult::Invalid("too long".into())
            } else {
                ValidationResult::Valid
            }
        })
        .into();
        assert!(v.validate("abc").is_valid());
        assert_eq!(v.validate("abcd").into_result(), Err("too long".into()));
    }

    #[test]
    fn test_function_pointers_convert_into_validators() {
        let v = ItemValidator::from(no_numbers);
        assert!(!v.validate("a1").is_valid());

        let list = ItemListValidator::from(at_least_one);
        assert!(list.validate(&["x", "y"]).is_valid());
    }
}
