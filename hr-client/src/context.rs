use std::sync::Arc;
use std::time::Duration;

use crate::errors::GatewayError;
use crate::models::UserProfile;
use crate::ports::AuthGateway;
use crate::ports::TokenStore;

/// Process-wide authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Before `initialize` has run.
    Uninitialized,
    /// Startup resolution in flight.
    Validating,
    /// Resolved or logged-in user held in memory.
    Authenticated(UserProfile),
    Unauthenticated,
}

/// Client-side session state machine.
///
/// Orchestrates the auth lifecycle: calls the gateway's login on `login`,
/// resolves the persisted token once at process start, and owns the single
/// writer seat for the token store. `&mut self` throughout: there is one
/// logical owner on a single-threaded event loop, so exclusive borrows
/// serialize every transition.
pub struct SessionContext<G, S>
where
    G: AuthGateway,
    S: TokenStore,
{
    gateway: Arc<G>,
    token_store: Arc<S>,
    resolve_timeout: Duration,
    state: SessionState,
}

impl<G, S> SessionContext<G, S>
where
    G: AuthGateway,
    S: TokenStore,
{
    /// Create a new, uninitialized session context.
    ///
    /// # Arguments
    /// * `gateway` - Backend auth calls
    /// * `token_store` - Client-local persistent token storage
    /// * `resolve_timeout` - Upper wait bound for the startup resolution;
    ///   past it the attempt counts as failed, never hung
    pub fn new(gateway: Arc<G>, token_store: Arc<S>, resolve_timeout: Duration) -> Self {
        Self {
            gateway,
            token_store,
            resolve_timeout,
            state: SessionState::Uninitialized,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The authenticated user, if any.
    pub fn current_user(&self) -> Option<&UserProfile> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True from process start until the initial resolution completes.
    pub fn is_validating(&self) -> bool {
        matches!(self.state, SessionState::Uninitialized | SessionState::Validating)
    }

    /// Run the startup resolution. Triggered once per process start; calling
    /// it again is a no-op.
    ///
    /// No persisted token short-circuits to `Unauthenticated` without a
    /// network call. Any resolution failure or timeout clears the persisted
    /// token and downgrades silently: failures are logged, never surfaced,
    /// because a broken session must deauthenticate, not crash.
    pub async fn initialize(&mut self) {
        if !matches!(self.state, SessionState::Uninitialized) {
            return;
        }
        self.state = SessionState::Validating;

        let token = match self.token_store.load() {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => {
                self.state = SessionState::Unauthenticated;
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not read persisted token");
                self.state = SessionState::Unauthenticated;
                return;
            }
        };

        // Dropping the future on timeout cancels the in-flight request, so
        // the machine can never stay stuck in Validating.
        let resolution =
            tokio::time::timeout(self.resolve_timeout, self.gateway.current_user(&token)).await;

        match resolution {
            Ok(Ok(user)) => {
                tracing::debug!(user_id = %user.id, "Startup session resolved");
                self.state = SessionState::Authenticated(user);
            }
            Ok(Err(e)) => {
                match &e {
                    GatewayError::Rejected { status, message } => tracing::warn!(
                        status = *status,
                        message = %message,
                        "Persisted session rejected by backend"
                    ),
                    GatewayError::Transport(_) => {
                        tracing::warn!(error = %e, "Backend unreachable during startup resolution")
                    }
                }
                self.discard_token();
                self.state = SessionState::Unauthenticated;
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.resolve_timeout.as_millis() as u64,
                    "Startup session resolution timed out"
                );
                self.discard_token();
                self.state = SessionState::Unauthenticated;
            }
        }
    }

    /// Authenticate with credentials.
    ///
    /// On success the token is persisted and the state moves to
    /// `Authenticated`. On failure the error is propagated to the caller and
    /// the state is left as it was; the UI decides whether to prompt a retry.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, GatewayError> {
        let outcome = self.gateway.login(email, password).await?;

        if let Err(e) = self.token_store.save(&outcome.token) {
            // The session is still valid in memory for this process.
            tracing::warn!(error = %e, "Could not persist session token");
        }

        tracing::info!(user_id = %outcome.user.id, "Logged in");
        self.state = SessionState::Authenticated(outcome.user.clone());

        Ok(outcome.user)
    }

    /// Drop the in-memory user and the persisted token.
    ///
    /// Navigating away from authenticated views is the routing collaborator's
    /// concern, not handled here.
    pub fn logout(&mut self) {
        self.discard_token();
        self.state = SessionState::Unauthenticated;
        tracing::info!("Logged out");
    }

    fn discard_token(&mut self) {
        if let Err(e) = self.token_store.clear() {
            tracing::warn!(error = %e, "Could not clear persisted token");
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use session::Role;
    use session::Status;

    use super::*;
    use crate::models::LoginOutcome;
    use crate::outbound::token_file::InMemoryTokenStore;

    mock! {
        pub TestGateway {}

        #[async_trait]
        impl AuthGateway for TestGateway {
            async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, GatewayError>;
            async fn current_user(&self, token: &str) -> Result<UserProfile, GatewayError>;
        }
    }

    fn admin_profile() -> UserProfile {
        UserProfile {
            id: "1".to_string(),
            email: "admin@company.com".to_string(),
            name: "Admin User".to_string(),
            role: Role::Admin,
            status: Status::Active,
        }
    }

    fn context_with(
        gateway: MockTestGateway,
        store: Arc<InMemoryTokenStore>,
    ) -> SessionContext<MockTestGateway, InMemoryTokenStore> {
        SessionContext::new(Arc::new(gateway), store, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_initialize_without_token_skips_network() {
        let mut gateway = MockTestGateway::new();
        gateway.expect_current_user().times(0);

        let store = Arc::new(InMemoryTokenStore::new());
        let mut context = context_with(gateway, store);

        assert!(context.is_validating());
        context.initialize().await;

        assert_eq!(*context.state(), SessionState::Unauthenticated);
        assert!(!context.is_validating());
    }

    #[tokio::test]
    async fn test_initialize_with_valid_token_authenticates() {
        let mut gateway = MockTestGateway::new();
        gateway
            .expect_current_user()
            .withf(|token| token == "persisted-token")
            .times(1)
            .returning(|_| Ok(admin_profile()));

        let store = Arc::new(InMemoryTokenStore::new());
        store.save("persisted-token").unwrap();

        let mut context = context_with(gateway, Arc::clone(&store));
        context.initialize().await;

        assert_eq!(context.current_user(), Some(&admin_profile()));
        // The token survives a successful resolution.
        assert_eq!(store.load().unwrap().as_deref(), Some("persisted-token"));
    }

    #[tokio::test]
    async fn test_initialize_with_rejected_token_clears_and_downgrades() {
        let mut gateway = MockTestGateway::new();
        gateway.expect_current_user().times(1).returning(|_| {
            Err(GatewayError::Rejected {
                status: 404,
                message: "No account matches this session".to_string(),
            })
        });

        let store = Arc::new(InMemoryTokenStore::new());
        store.save("stale-token").unwrap();

        let mut context = context_with(gateway, Arc::clone(&store));
        context.initialize().await;

        assert_eq!(*context.state(), SessionState::Unauthenticated);
        assert_eq!(store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_initialize_with_unreachable_backend_downgrades() {
        let mut gateway = MockTestGateway::new();
        gateway
            .expect_current_user()
            .times(1)
            .returning(|_| Err(GatewayError::Transport("connection refused".to_string())));

        let store = Arc::new(InMemoryTokenStore::new());
        store.save("some-token").unwrap();

        let mut context = context_with(gateway, Arc::clone(&store));
        context.initialize().await;

        assert_eq!(*context.state(), SessionState::Unauthenticated);
        assert_eq!(store.load().unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_times_out() {
        // A gateway that never answers within the bound.
        struct StalledGateway;

        #[async_trait]
        impl AuthGateway for StalledGateway {
            async fn login(&self, _: &str, _: &str) -> Result<LoginOutcome, GatewayError> {
                unreachable!("login is not part of this test")
            }

            async fn current_user(&self, _: &str) -> Result<UserProfile, GatewayError> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(admin_profile())
            }
        }

        let store = Arc::new(InMemoryTokenStore::new());
        store.save("slow-token").unwrap();

        let mut context = SessionContext::new(
            Arc::new(StalledGateway),
            Arc::clone(&store),
            Duration::from_millis(20),
        );

        // Paused time auto-advances to the earliest timer, so the 20ms
        // bound fires long before the stalled gateway would answer.
        context.initialize().await;

        assert_eq!(*context.state(), SessionState::Unauthenticated);
        assert_eq!(store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_initialize_runs_once() {
        let mut gateway = MockTestGateway::new();
        // Exactly one resolution even if initialize is called twice.
        gateway
            .expect_current_user()
            .times(1)
            .returning(|_| Ok(admin_profile()));

        let store = Arc::new(InMemoryTokenStore::new());
        store.save("persisted-token").unwrap();

        let mut context = context_with(gateway, store);
        context.initialize().await;
        context.initialize().await;

        assert_eq!(context.current_user(), Some(&admin_profile()));
    }

    #[tokio::test]
    async fn test_login_persists_token_and_authenticates() {
        let mut gateway = MockTestGateway::new();
        gateway
            .expect_login()
            .withf(|email, password| email == "admin@company.com" && password == "password123")
            .times(1)
            .returning(|_, _| {
                Ok(LoginOutcome {
                    user: admin_profile(),
                    token: "fresh-token".to_string(),
                })
            });

        let store = Arc::new(InMemoryTokenStore::new());
        let mut context = context_with(gateway, Arc::clone(&store));

        let user = context
            .login("admin@company.com", "password123")
            .await
            .expect("Login failed");

        assert_eq!(user, admin_profile());
        assert_eq!(context.current_user(), Some(&admin_profile()));
        assert_eq!(store.load().unwrap().as_deref(), Some("fresh-token"));
    }

    #[tokio::test]
    async fn test_login_failure_propagates() {
        let mut gateway = MockTestGateway::new();
        gateway.expect_login().times(1).returning(|_, _| {
            Err(GatewayError::Rejected {
                status: 401,
                message: "Invalid email or password".to_string(),
            })
        });

        let store = Arc::new(InMemoryTokenStore::new());
        let mut context = context_with(gateway, Arc::clone(&store));

        let result = context.login("admin@company.com", "wrongpass").await;

        let err = result.expect_err("Login must fail");
        assert!(matches!(err, GatewayError::Rejected { status: 401, .. }));
        assert_eq!(context.current_user(), None);
        // Nothing was persisted.
        assert_eq!(store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let mut gateway = MockTestGateway::new();
        gateway.expect_login().times(1).returning(|_, _| {
            Ok(LoginOutcome {
                user: admin_profile(),
                token: "fresh-token".to_string(),
            })
        });

        let store = Arc::new(InMemoryTokenStore::new());
        let mut context = context_with(gateway, Arc::clone(&store));

        context
            .login("admin@company.com", "password123")
            .await
            .unwrap();
        context.logout();

        assert_eq!(*context.state(), SessionState::Unauthenticated);
        assert_eq!(context.current_user(), None);
        assert_eq!(store.load().unwrap(), None);
    }
}
