use thiserror::Error;

/// Failures from the Argon2 hashing primitives.
///
/// A password mismatch is not an error: `verify` reports it as
/// `Ok(false)`. `VerificationFailed` means the stored hash itself was
/// unusable.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is unusable: {0}")]
    VerificationFailed(String),
}
