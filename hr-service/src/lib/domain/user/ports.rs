use async_trait::async_trait;

use crate::user::errors::AuthError;
use crate::user::models::IssuedSession;
use crate::user::models::UserRecord;

/// Port for session issuance and resolution.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Validate credentials and issue a session token.
    ///
    /// # Arguments
    /// * `email` - Login email (raw, untrimmed)
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// The matched record plus the encoded token
    ///
    /// # Errors
    /// * `MissingField` - Either input is empty
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Unexpected` - Store or codec failure
    async fn issue(&self, email: &str, password: &str) -> Result<IssuedSession, AuthError>;

    /// Resolve a bearer header value back to the current account record.
    ///
    /// # Arguments
    /// * `bearer` - Raw `Authorization` header value, if the header was present
    ///
    /// # Returns
    /// The CURRENT record re-fetched from the credential store; the token
    /// claims are only a lookup key
    ///
    /// # Errors
    /// * `MissingToken` - Header absent, or empty after stripping the scheme marker
    /// * `MalformedToken` - Token does not decode into the expected claims
    /// * `UnknownUser` - Decoded email has no record
    /// * `Unexpected` - Store failure
    async fn resolve(&self, bearer: Option<&str>) -> Result<UserRecord, AuthError>;
}

/// Read-only lookup table of account records, keyed by email.
///
/// Immutable at runtime: no create/update/delete operations exist.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a record by email.
    ///
    /// # Arguments
    /// * `email` - Lookup key
    ///
    /// # Returns
    /// Optional record (None if not found; absence is a valid outcome)
    ///
    /// # Errors
    /// * `Unexpected` - Adapter I/O failure
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError>;
}
