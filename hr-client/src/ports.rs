use async_trait::async_trait;

use crate::errors::GatewayError;
use crate::errors::TokenStoreError;
use crate::models::LoginOutcome;
use crate::models::UserProfile;

/// Port for the two backend auth calls the session lifecycle depends on.
#[async_trait]
pub trait AuthGateway: Send + Sync + 'static {
    /// Exchange credentials for a profile and a session token.
    ///
    /// # Errors
    /// * `Rejected` - Backend refused the credentials (carries its message)
    /// * `Transport` - Request never produced a backend answer
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, GatewayError>;

    /// Resolve a persisted token back to the current profile.
    ///
    /// # Errors
    /// * `Rejected` - Token missing/malformed/unknown on the backend side
    /// * `Transport` - Request never produced a backend answer
    async fn current_user(&self, token: &str) -> Result<UserProfile, GatewayError>;
}

/// Client-local persistent storage for the session token.
///
/// Single key: read at process start, written on login, removed on logout or
/// invalidation. The session context is the only writer.
pub trait TokenStore: Send + Sync + 'static {
    /// Read the persisted token, if any.
    ///
    /// # Errors
    /// * `ReadFailed` - Storage could not be read
    fn load(&self) -> Result<Option<String>, TokenStoreError>;

    /// Persist a freshly issued token.
    ///
    /// # Errors
    /// * `WriteFailed` - Storage could not be written
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Remove the persisted token. Removing an absent token is not an error.
    ///
    /// # Errors
    /// * `WriteFailed` - Storage could not be written
    fn clear(&self) -> Result<(), TokenStoreError>;
}
