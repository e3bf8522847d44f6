//! Client-side session lifecycle for the HRMS front end.
//!
//! Owns the process-wide authentication state:
//! - `SessionContext` - the `Uninitialized → Validating → {Authenticated,
//!   Unauthenticated}` state machine driven at process start and by
//!   login/logout
//! - `AuthGateway` / `TokenStore` ports with HTTP and file-backed adapters
//!
//! A broken or expired session never crashes the application; it only
//! deauthenticates it. Rendering and navigation are external collaborators
//! that observe the state exposed here.

pub mod context;
pub mod errors;
pub mod models;
pub mod outbound;
pub mod ports;

// Re-export commonly used items
pub use context::SessionContext;
pub use context::SessionState;
pub use errors::GatewayError;
pub use errors::TokenStoreError;
pub use models::UserProfile;
pub use outbound::http::HttpAuthGateway;
pub use outbound::token_file::FileTokenStore;
pub use outbound::token_file::InMemoryTokenStore;
pub use ports::AuthGateway;
pub use ports::TokenStore;
