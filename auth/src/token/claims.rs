use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token claims.
///
/// Carries exactly one application claim: the subject (customer email).
/// `iat` and `exp` are Unix timestamps; `exp` is checked on every decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (customer email)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, expiring `validity` after `issued_at`.
    pub fn new(subject: impl Into<String>, issued_at: DateTime<Utc>, validity: Duration) -> Self {
        Self {
            sub: subject.into(),
            iat: issued_at.timestamp(),
            exp: (issued_at + validity).timestamp(),
        }
    }

    /// Check whether the claims are expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
