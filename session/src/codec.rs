use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::TokenError;

/// Session token codec.
///
/// Encodes claims as base64 over their JSON representation. Generic over the
/// claims type so callers can define their own token payload. Deterministic
/// and reversible by design; carries no signature (see crate docs).
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenCodec;

impl TokenCodec {
    /// Create a new token codec.
    pub fn new() -> Self {
        Self
    }

    /// Encode claims into an opaque token string.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode (must implement Serialize)
    ///
    /// # Returns
    /// base64 token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized to JSON
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        let json =
            serde_json::to_vec(claims).map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        Ok(STANDARD.encode(json))
    }

    /// Decode a token string back into claims.
    ///
    /// # Arguments
    /// * `token` - base64 token string
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `DecodingFailed` - Token is not valid base64, or the decoded bytes
    ///   do not deserialize into the expected claims shape
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        let json = STANDARD
            .decode(token)
            .map_err(|e| TokenError::DecodingFailed(e.to_string()))?;

        serde_json::from_slice(&json).map_err(|e| TokenError::DecodingFailed(e.to_string()))
    }
}
