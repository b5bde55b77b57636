use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Token codec for issuing and verifying access tokens.
///
/// Tokens are JWTs signed with HS256 and carry a single application claim
/// (the subject email) plus issue/expiry timestamps. Verification is
/// stateless: signature plus expiry check, nothing else. There is no
/// server-side revocation before expiry.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validity: Duration,
}

impl TokenCodec {
    /// Create a new token codec.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (at least 32 bytes for HS256)
    /// * `validity` - How long issued tokens remain valid
    pub fn new(secret: &[u8], validity: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            validity,
        }
    }

    /// Issue a signed token for the given subject.
    ///
    /// Expiry is issue time plus the configured validity.
    ///
    /// # Errors
    /// * `IssueFailed` - Token signing failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let claims = Claims::new(subject, Utc::now(), self.validity);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::IssueFailed(e.to_string()))
    }

    /// Check whether a token has a valid signature and is not expired.
    ///
    /// Any malformed, tampered, or expired token yields false.
    pub fn verify(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }

    /// Decode a token and return its subject.
    ///
    /// A token is expired from the instant `exp` is reached, inclusive.
    ///
    /// # Errors
    /// * `Expired` - Token expiry timestamp has been reached
    /// * `Malformed` - Signature invalid or token structure unreadable
    pub fn decode(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // jsonwebtoken's own expiry check accepts a token at exactly
        // t == exp; `Claims::is_expired` owns the boundary instead
        validation.validate_exp = false;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::Malformed(e.to_string()))?;

        let claims = token_data.claims;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims.sub)
    }
}
