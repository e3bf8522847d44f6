use thiserror::Error;

/// Error type for auth gateway calls.
///
/// `Rejected` carries what the backend said; everything else is transport.
/// The distinction matters to operators reading logs ("expired token" vs
/// "backend unreachable") even though the session context downgrades to
/// unauthenticated either way at startup.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Error type for persisted-token storage operations.
#[derive(Debug, Clone, Error)]
pub enum TokenStoreError {
    #[error("Failed to read persisted token: {0}")]
    ReadFailed(String),

    #[error("Failed to write persisted token: {0}")]
    WriteFailed(String),
}
