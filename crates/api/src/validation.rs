//! Request-level validation for account and profile fields.
//!
//! These are UI-tier rules; the persistence layer stores what it is
//! given and only enforces its own structural constraints.

use std::fmt;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty value where one is required.
    Empty(String),
    /// Value too long.
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },
    /// Password shorter than the minimum.
    PasswordTooShort { min: usize },
    /// Age outside the accepted range.
    AgeOutOfRange(i64),
    /// Blood type not in the accepted set.
    UnknownBloodType(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty(field) => write!(f, "{} cannot be empty", field),
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} chars, max {})", field, actual, max)
            }
            ValidationError::PasswordTooShort { min } => {
                write!(f, "password must be at least {} characters", min)
            }
            ValidationError::AgeOutOfRange(age) => {
                write!(f, "age must be between 1 and 120, got {}", age)
            }
            ValidationError::UnknownBloodType(value) => {
                write!(f, "unrecognized blood type: {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Maximum allowed length for usernames.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Minimum allowed password length.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Accepted blood type values.
pub const BLOOD_TYPES: &[&str] = &[
    "Unknown", "A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-",
];

/// Validate a username: non-empty after trimming, bounded length.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::Empty("username".to_string()));
    }
    if username.len() > MAX_USERNAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: MAX_USERNAME_LENGTH,
            actual: username.len(),
        });
    }
    Ok(())
}

/// Validate a password against the minimum length rule.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Validate an age if one was supplied.
pub fn validate_age(age: i64) -> Result<(), ValidationError> {
    if !(1..=120).contains(&age) {
        return Err(ValidationError::AgeOutOfRange(age));
    }
    Ok(())
}

/// Validate a blood type against the accepted set.
pub fn validate_blood_type(blood_type: &str) -> Result<(), ValidationError> {
    if BLOOD_TYPES.contains(&blood_type) {
        Ok(())
    } else {
        Err(ValidationError::UnknownBloodType(blood_type.to_string()))
    }
}
