use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for session issuance and resolution.
///
/// One variant per failure the wire contract distinguishes. Credential
/// mismatch and unknown login email intentionally collapse into
/// `InvalidCredentials` so the caller cannot tell which occurred.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Missing authentication token")]
    MissingToken,

    #[error("Malformed authentication token")]
    MalformedToken,

    #[error("No account matches this session")]
    UnknownUser,

    // Infrastructure errors
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError::Unexpected(err.to_string())
    }
}
