//! Authentication primitives
//!
//! Reusable infrastructure for the shopping-cart service:
//! - Password hashing (Argon2id)
//! - Signed, time-bound access tokens (JWT, HS256)
//!
//! The service layer owns the authentication flow (credential lookup and
//! comparison); this crate only provides the cryptographic building blocks.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("Passw0rd1").unwrap();
//! assert!(hasher.verify("Passw0rd1", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//! let token = codec.issue("a@a.com").unwrap();
//! assert!(codec.verify(&token));
//! assert_eq!(codec.decode(&token).unwrap(), "a@a.com");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
