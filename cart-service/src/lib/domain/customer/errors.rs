use thiserror::Error;

/// Error for Email validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for password policy violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Password may only contain ASCII letters and digits")]
    InvalidCharacters,

    #[error("Password must contain at least one letter")]
    NoLetter,

    #[error("Password must contain at least one digit")]
    NoDigit,
}

/// Error for Nickname validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NicknameError {
    #[error("Nickname too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Nickname contains invalid characters (only alphanumeric allowed)")]
    InvalidCharacters,
}

/// Top-level error for customer operations
#[derive(Debug, Clone, Error)]
pub enum CustomerError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    #[error("Invalid nickname: {0}")]
    InvalidNickname(#[from] NicknameError),

    // Domain-level errors
    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
