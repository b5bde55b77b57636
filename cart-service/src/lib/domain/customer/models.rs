use std::fmt;
use std::str::FromStr;

use crate::domain::customer::errors::EmailError;
use crate::domain::customer::errors::NicknameError;
use crate::domain::customer::errors::PasswordPolicyError;

/// Customer aggregate entity.
///
/// Represents a registered customer. The email is immutable after creation
/// and unique across the store.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub email: Email,
    pub password_hash: String,
    pub nickname: Nickname,
}

/// Customer unique identifier, assigned by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomerId(pub i64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address value type
///
/// Validates email format using an RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| Email(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password value type, validated against the signup policy.
///
/// The policy: 8-20 ASCII alphanumeric characters with at least one letter
/// and one digit. The plaintext never leaves the service layer; storage is
/// always the Argon2 hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;
    const MAX_LENGTH: usize = 20;

    /// Create a new policy-checked password.
    ///
    /// # Errors
    /// * `TooShort` / `TooLong` - Length outside 8-20
    /// * `InvalidCharacters` - Non-alphanumeric or non-ASCII characters
    /// * `NoLetter` / `NoDigit` - Missing a required character class
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let password = Self::with_valid_length(password)?;
        let password = Self::with_valid_chars(password)?;
        Ok(Self(password))
    }

    fn with_valid_length(password: String) -> Result<String, PasswordPolicyError> {
        let length = password.len();
        if length < Self::MIN_LENGTH {
            Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(PasswordPolicyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(password)
        }
    }

    fn with_valid_chars(password: String) -> Result<String, PasswordPolicyError> {
        if !password.chars().all(|c| c.is_ascii_alphanumeric()) {
            Err(PasswordPolicyError::InvalidCharacters)
        } else if !password.chars().any(|c| c.is_ascii_alphabetic()) {
            Err(PasswordPolicyError::NoLetter)
        } else if !password.chars().any(|c| c.is_ascii_digit()) {
            Err(PasswordPolicyError::NoDigit)
        } else {
            Ok(password)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Nickname value type
///
/// At least 2 characters, alphanumeric only (Unicode letters are accepted,
/// covering Hangul nicknames).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nickname(String);

impl Nickname {
    const MIN_LENGTH: usize = 2;

    /// Create a new validated nickname.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 2 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters
    pub fn new(nickname: String) -> Result<Self, NicknameError> {
        let length = nickname.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(NicknameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if !nickname.chars().all(|c| c.is_alphanumeric()) {
            return Err(NicknameError::InvalidCharacters);
        }
        Ok(Self(nickname))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new customer with domain types
#[derive(Debug)]
pub struct RegisterCustomerCommand {
    pub email: Email,
    pub password: Password,
    pub nickname: Nickname,
}

impl RegisterCustomerCommand {
    pub fn new(email: Email, password: Password, nickname: Nickname) -> Self {
        Self {
            email,
            password,
            nickname,
        }
    }
}

/// Customer record ready for insertion; the id is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub email: Email,
    pub password_hash: String,
    pub nickname: Nickname,
}
