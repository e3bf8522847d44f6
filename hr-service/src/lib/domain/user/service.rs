use std::sync::Arc;

use async_trait::async_trait;
use session::SessionClaims;
use session::TokenCodec;

use crate::user::errors::AuthError;
use crate::user::models::IssuedSession;
use crate::user::models::UserRecord;
use crate::user::ports::CredentialStore;
use crate::user::ports::SessionServicePort;

/// Expected scheme marker on the `Authorization` header.
const BEARER_PREFIX: &str = "Bearer ";

/// Session issuer and resolver over an injected credential store.
///
/// Stateless: issuance and resolution never mutate the store, and the token
/// itself carries everything the resolver needs to re-look the account up.
pub struct SessionService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    codec: TokenCodec,
}

impl<CS> SessionService<CS>
where
    CS: CredentialStore,
{
    /// Create a new session service with an injected store.
    pub fn new(store: Arc<CS>) -> Self {
        Self {
            store,
            codec: TokenCodec::new(),
        }
    }
}

#[async_trait]
impl<CS> SessionServicePort for SessionService<CS>
where
    CS: CredentialStore,
{
    async fn issue(&self, email: &str, password: &str) -> Result<IssuedSession, AuthError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        // Emptiness is judged after trimming; the secret comparison below
        // still uses the password exactly as supplied.
        if password.trim().is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        // Unknown email and wrong password must be indistinguishable.
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if user.secret != password {
            return Err(AuthError::InvalidCredentials);
        }

        let claims = SessionClaims::new(user.id.clone(), user.email.as_str(), user.role);
        let token = self
            .codec
            .encode(&claims)
            .map_err(|e| AuthError::Unexpected(format!("Token encoding failed: {}", e)))?;

        tracing::info!(user_id = %user.id, role = %user.role, "Session issued");

        Ok(IssuedSession { user, token })
    }

    async fn resolve(&self, bearer: Option<&str>) -> Result<UserRecord, AuthError> {
        let token = bearer
            .map(|value| value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim())
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims: SessionClaims = self
            .codec
            .decode(token)
            .map_err(|_| AuthError::MalformedToken)?;

        if claims.email.is_empty() {
            return Err(AuthError::MalformedToken);
        }

        // Re-fetch the authoritative record rather than trusting the claims:
        // role/status changes after issuance win on the next resolution.
        self.store
            .find_by_email(&claims.email)
            .await?
            .ok_or(AuthError::UnknownUser)
    }
}
